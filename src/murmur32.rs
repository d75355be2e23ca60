//! MurmurHash3 x86_32 as a streaming digest.

use std::hash::Hasher;

use crate::fmix::fmix32;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

const BLOCK_SIZE: usize = 4;

/// A partial evaluation of a 32-bit MurmurHash3.
///
/// Input is processed as little-endian words assembled byte by byte, so the
/// result is the same on every architecture and the input slices need no
/// particular alignment.
#[derive(Debug, Clone, Copy, Default, Eq)]
pub struct Digest32 {
    tail: [u8; BLOCK_SIZE],
    tail_len: usize, // Valid bytes in `tail`.
    total_len: u64,  // Cumulative length of all input.
    h1: u32,
}

impl Digest32 {
    /// Size of the digest output, in bytes.
    pub const SIZE: usize = 4;

    /// Size of one input block, in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// A digest with a zero seed.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// A digest whose accumulator starts at `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            h1: seed,
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
            let (h1, _) = mix_blocks(self.h1, &self.tail);
            self.h1 = h1;
            self.tail_len = 0;
            data = rest;
        }

        let (h1, rest) = mix_blocks(self.h1, data);
        self.h1 = h1;
        self.tail[..rest.len()].copy_from_slice(rest);
        self.tail_len = rest.len();
    }

    /// Computes the hash of everything written so far.
    ///
    /// The digest itself is left untouched, so more data can be written
    /// afterwards.
    pub fn finalize(&self) -> u32 {
        let mut h1 = self.h1;

        if self.tail_len > 0 {
            let mut k1 = 0u32;
            for (i, &byte) in self.tail[..self.tail_len].iter().enumerate() {
                k1 ^= (byte as u32) << (8 * i);
            }
            h1 ^= mix_k1(k1);
        }

        h1 ^= self.total_len as u32;
        fmix32(h1)
    }

    /// The finalized hash as big-endian bytes.
    pub fn sum(&self) -> [u8; Self::SIZE] {
        self.finalize().to_be_bytes()
    }
}

// Bytes past `tail_len` are stale and must not take part.
impl PartialEq for Digest32 {
    fn eq(&self, other: &Self) -> bool {
        self.h1 == other.h1
            && self.total_len == other.total_len
            && self.tail[..self.tail_len] == other.tail[..other.tail_len]
    }
}

impl Hasher for Digest32 {
    fn write(&mut self, bytes: &[u8]) {
        Digest32::write(self, bytes);
    }

    fn finish(&self) -> u64 {
        self.finalize() as u64
    }
}

#[inline(always)]
fn mix_k1(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Mixes all complete blocks of `data` into `h1`, returning the updated
/// accumulator and the unconsumed 0-3 trailing bytes.
fn mix_blocks(mut h1: u32, data: &[u8]) -> (u32, &[u8]) {
    let mut blocks = data.chunks_exact(BLOCK_SIZE);
    for block in &mut blocks {
        let k1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);

        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe6546b64);
    }
    (h1, blocks.remainder())
}
