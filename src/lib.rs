//! Streaming, allocation-free MurmurHash3 digests.
//!
//! The digests accept input in chunks of any size and produce the same
//! values as the canonical one-shot MurmurHash3 x86_32 and x64_128
//! functions.  The 64-bit digest is the first lane of the 128-bit one.

pub mod fmix;
pub mod murmur128;
pub mod murmur32;
pub mod murmur64;

pub use murmur128::Digest128;
pub use murmur32::Digest32;
pub use murmur64::Digest64;
