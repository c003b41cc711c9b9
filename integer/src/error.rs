//! Errors surfaced by [`BigInt`](crate::BigInt) operations.

use thiserror::Error;

/// Failure of an arithmetic operation or native conversion.
///
/// The first two variants depend on operand values; the rest reject an
/// invalid argument before any work is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("value does not fit in the requested integer type")]
    Overflow,
    #[error("exponent is negative")]
    NegativeExponent,
    #[error("modulus must be positive")]
    NonPositiveModulus,
    #[error("square root of a negative value")]
    SqrtOfNegative,
}

/// Failure to parse a decimal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("empty string")]
    Empty,
    #[error("no digits after the sign")]
    NoDigits,
    #[error("invalid character {0:?} in decimal string")]
    InvalidDigit(char),
}
