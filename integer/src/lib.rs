//! Arbitrary-precision signed integer arithmetic.
//!
//! Sign-magnitude values over 16-bit words, with a recursive
//! divide-and-conquer multiplier, a dedicated squarer, normalized long
//! division, decimal string conversion, and two's-complement byte
//! interchange.

pub mod bigint;
pub mod error;

mod div;
mod mul;
mod serde_impl;
mod words;

pub use bigint::{BigInt, Endian};
pub use error::{BigIntError, ParseBigIntError};
