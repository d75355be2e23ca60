//! MurmurHash3 x64_128 as a streaming digest.

use std::hash::Hasher;

use crate::fmix::fmix64;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

const BLOCK_SIZE: usize = 16;

/// A partial evaluation of a 128-bit MurmurHash3.
///
/// The canonical implementation takes a single 32-bit seed for both lanes.
/// To reproduce it, pass that seed as both `seed1` and `seed2`.
#[derive(Debug, Clone, Copy, Default, Eq)]
pub struct Digest128 {
    tail: [u8; BLOCK_SIZE],
    tail_len: usize, // Valid bytes in `tail`.
    total_len: u64,  // Cumulative length of all input.
    h1: u64,
    h2: u64,
}

impl Digest128 {
    /// Size of the digest output, in bytes.
    pub const SIZE: usize = 16;

    /// Size of one input block, in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// A digest with both lanes seeded with zero.
    pub fn new() -> Self {
        Self::with_seeds(0, 0)
    }

    /// A digest whose lanes start at `seed1` and `seed2`.
    pub fn with_seeds(seed1: u64, seed2: u64) -> Self {
        Self {
            h1: seed1,
            h2: seed2,
            ..Self::default()
        }
    }

    /// Feeds `data` into the digest.
    pub fn write(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Pending tail bytes go in front of the new data.
        if self.tail_len > 0 {
            let free = Self::BLOCK_SIZE - self.tail_len;
            if free > data.len() {
                self.tail[self.tail_len..(self.tail_len + data.len())].copy_from_slice(data);
                self.tail_len += data.len();
                return;
            }

            let (head, rest) = data.split_at(free);
            self.tail[self.tail_len..].copy_from_slice(head);
            let (h, _) = mix_blocks([self.h1, self.h2], &self.tail);
            [self.h1, self.h2] = h;
            self.tail_len = 0;
            data = rest;
        }

        let (h, rest) = mix_blocks([self.h1, self.h2], data);
        [self.h1, self.h2] = h;
        self.tail[..rest.len()].copy_from_slice(rest);
        self.tail_len = rest.len();
    }

    /// Computes the two 64-bit halves of the hash of everything written so
    /// far.
    ///
    /// The digest itself is left untouched, so more data can be written
    /// afterwards.
    pub fn finalize(&self) -> (u64, u64) {
        let mut h1 = self.h1;
        let mut h2 = self.h2;
        let tail = &self.tail[..self.tail_len];

        // The upper half of the tail is folded into `h2` before the lower
        // half touches `h1`.
        if tail.len() > 8 {
            h2 ^= mix_k2(le_partial(&tail[8..]));
        }
        if !tail.is_empty() {
            h1 ^= mix_k1(le_partial(&tail[..tail.len().min(8)]));
        }

        h1 ^= self.total_len;
        h2 ^= self.total_len;

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        h1 = fmix64(h1);
        h2 = fmix64(h2);

        h1 = h1.wrapping_add(h2);
        h2 = h2.wrapping_add(h1);

        (h1, h2)
    }

    /// The finalized hash as big-endian bytes, first half first.
    pub fn sum(&self) -> [u8; Self::SIZE] {
        let (h1, h2) = self.finalize();
        let mut out = [0u8; Self::SIZE];
        out[0..8].copy_from_slice(&h1.to_be_bytes());
        out[8..16].copy_from_slice(&h2.to_be_bytes());
        out
    }
}

// Bytes past `tail_len` are stale and must not take part.
impl PartialEq for Digest128 {
    fn eq(&self, other: &Self) -> bool {
        self.h1 == other.h1
            && self.h2 == other.h2
            && self.total_len == other.total_len
            && self.tail[..self.tail_len] == other.tail[..other.tail_len]
    }
}

impl Hasher for Digest128 {
    fn write(&mut self, bytes: &[u8]) {
        Digest128::write(self, bytes);
    }

    fn finish(&self) -> u64 {
        self.finalize().0
    }
}

#[inline(always)]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline(always)]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Assembles up to 8 bytes into a little-endian word, lowest byte first.
fn le_partial(bytes: &[u8]) -> u64 {
    let mut k = 0u64;
    for (i, &byte) in bytes.iter().enumerate() {
        k ^= (byte as u64) << (8 * i);
    }
    k
}

/// Mixes all complete blocks of `data` into the two lanes, returning the
/// updated lanes and the unconsumed 0-15 trailing bytes.
fn mix_blocks(h: [u64; 2], data: &[u8]) -> ([u64; 2], &[u8]) {
    let [mut h1, mut h2] = h;

    let mut blocks = data.chunks_exact(BLOCK_SIZE);
    for block in &mut blocks {
        let k1 = u64::from_le_bytes([
            block[0], block[1], block[2], block[3], block[4], block[5], block[6], block[7],
        ]);
        let k2 = u64::from_le_bytes([
            block[8], block[9], block[10], block[11], block[12], block[13], block[14], block[15],
        ]);

        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

        h2 ^= mix_k2(k2);
        h2 = h2.rotate_left(31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);
    }

    ([h1, h2], blocks.remainder())
}
