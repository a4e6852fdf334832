#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;

pub use arithmetic::{Coordinate, Curve, FieldElement, Point};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("value {value} not in field range 0 to {prime} (exclusive)")]
    OutOfRange { value: i128, prime: u64 },
    #[error("modulus {0} is not a valid field order")]
    InvalidModulus(u64),
    #[error("cannot combine elements of different fields: {0} and {1}")]
    FieldMismatch(u64, u64),
    #[error("points are not on the same curve")]
    CurveMismatch,
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("attempted to divide by zero")]
    DivisionUndefined,
    #[error("quotient is not an integer")]
    InexactDivision,
    #[error("integer overflow")]
    Overflow,
}
