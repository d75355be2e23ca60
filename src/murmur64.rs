//! 64-bit MurmurHash3, taken as the first half of the 128-bit variant.

use std::hash::Hasher;

use crate::murmur128::Digest128;

/// A partial evaluation of a 64-bit hash.
///
/// The canonical implementation has no 64-bit variant.  This is a
/// `Digest128` seeded with `(seed, seed)` that only reports `h1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Digest64(Digest128);

impl Digest64 {
    /// Size of the digest output, in bytes.
    pub const SIZE: usize = 8;

    /// Size of one input block, in bytes.
    pub const BLOCK_SIZE: usize = Digest128::BLOCK_SIZE;

    /// A digest with a zero seed.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// A digest with both underlying 128-bit lanes seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self(Digest128::with_seeds(seed, seed))
    }

    /// Feeds `data` into the digest.
    pub fn write(&mut self, data: &[u8]) {
        self.0.write(data);
    }

    /// Computes the hash of everything written so far, leaving the digest
    /// untouched.
    pub fn finalize(&self) -> u64 {
        self.0.finalize().0
    }

    /// The finalized hash as big-endian bytes.
    pub fn sum(&self) -> [u8; Self::SIZE] {
        self.finalize().to_be_bytes()
    }
}

impl Hasher for Digest64 {
    fn write(&mut self, bytes: &[u8]) {
        Digest64::write(self, bytes);
    }

    fn finish(&self) -> u64 {
        self.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanorand::{Rng, WyRand};
    use std::collections::HashMap;
    use std::hash::BuildHasherDefault;

    #[test]
    fn reference_vectors() {
        for (hash, s) in [
            (0x0000000000000000u64, ""),
            (0xcbd8a7b341bd9b02, "hello"),
            (0x342fac623a5ebc8e, "hello, world"),
            (0xb89e5988b737affc, "19 Jan 2038 at 3:14:07 AM"),
            (
                0xcd99481f9ee902c9,
                "The quick brown fox jumps over the lazy dog.",
            ),
        ] {
            let mut d = Digest64::new();
            d.write(s.as_bytes());
            assert_eq!(d.finalize(), hash, "{:?}", s);
        }
    }

    #[test]
    fn first_lane_of_128() {
        let mut rng = WyRand::new_seed(64);
        for _ in 0..100 {
            let seed = rng.generate::<u64>();
            let mut data = vec![0u8; rng.generate_range(0..100usize)];
            rng.fill_bytes(&mut data);

            let mut d64 = Digest64::with_seed(seed);
            let mut d128 = Digest128::with_seeds(seed, seed);
            let split = rng.generate_range(0..=data.len());
            d64.write(&data[..split]);
            d64.write(&data[split..]);
            d128.write(&data);

            assert_eq!(d64.finalize(), d128.finalize().0);
        }
    }

    #[test]
    fn unaligned_input() {
        let in1 = b"abcdefghijklmnopqrstuvwxyz";
        let in2 = b"_abcdefghijklmnopqrstuvwxyz";

        let mut a = Digest64::new();
        a.write(in1);
        let mut b = Digest64::new();
        b.write(&in2[1..]);
        assert_eq!(a.finalize(), b.finalize());
    }

    #[test]
    fn equality_ignores_stale_tail_bytes() {
        let mut a = Digest64::with_seed(3);
        a.write(b"abcdefghijklmnop");
        let mut b = Digest64::with_seed(3);
        b.write(b"abcdefgh");
        b.write(b"ijklmnop");
        assert_eq!(a, b);
    }

    #[test]
    fn sum_is_big_endian() {
        let mut d = Digest64::with_seed(42);
        d.write(b"hello");
        assert_eq!(d.sum(), 0xc4b8b3c960af6f08u64.to_be_bytes());
    }

    #[test]
    fn as_map_hasher() {
        let mut map: HashMap<&str, u32, BuildHasherDefault<Digest64>> = HashMap::default();
        map.insert("hello", 1);
        map.insert("world", 2);
        assert_eq!(map.get("hello"), Some(&1));
        assert_eq!(map.get("world"), Some(&2));
        assert_eq!(map.get("nope"), None);
    }
}
