use super::field::FieldElement;
use crate::ArithmeticError;

use num_integer::Integer;

use std::fmt;

/// Arithmetic a point coordinate has to support for the chord-and-tangent
/// law to be evaluated over it.
///
/// Every operation is fallible so that field mismatches, overflows and
/// undefined divisions surface to the caller of the point operation.
pub trait Coordinate: Clone + fmt::Debug + PartialEq {
    fn add(&self, other: &Self) -> Result<Self, ArithmeticError>;

    fn sub(&self, other: &Self) -> Result<Self, ArithmeticError>;

    fn mul(&self, other: &Self) -> Result<Self, ArithmeticError>;

    fn div(&self, other: &Self) -> Result<Self, ArithmeticError>;

    fn negate(&self) -> Result<Self, ArithmeticError>;

    fn is_zero(&self) -> bool;

    fn square(&self) -> Result<Self, ArithmeticError> {
        self.mul(self)
    }

    fn double(&self) -> Result<Self, ArithmeticError> {
        self.add(self)
    }

    fn triple(&self) -> Result<Self, ArithmeticError> {
        self.double()?.add(self)
    }
}

impl Coordinate for FieldElement {
    fn add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        FieldElement::add(self, other)
    }

    fn sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        FieldElement::sub(self, other)
    }

    fn mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        FieldElement::mul(self, other)
    }

    fn div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        FieldElement::div(self, other)
    }

    fn negate(&self) -> Result<Self, ArithmeticError> {
        Ok(FieldElement::neg(self))
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }
}

// Integer coordinates describe curves over the rationals restricted to their
// integral points. A division that leaves a remainder has no integral result.
impl Coordinate for i64 {
    fn add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.checked_add(*other).ok_or(ArithmeticError::Overflow)
    }

    fn sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.checked_sub(*other).ok_or(ArithmeticError::Overflow)
    }

    fn mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.checked_mul(*other).ok_or(ArithmeticError::Overflow)
    }

    fn div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        if *other == 0 {
            return Err(ArithmeticError::DivisionUndefined);
        }
        // the quotient of i64::MIN / -1 does not fit into an i64
        if *self == i64::MIN && *other == -1 {
            return Err(ArithmeticError::Overflow);
        }
        let (quotient, remainder) = self.div_rem(other);
        if remainder != 0 {
            return Err(ArithmeticError::InexactDivision);
        }
        Ok(quotient)
    }

    fn negate(&self) -> Result<Self, ArithmeticError> {
        self.checked_neg().ok_or(ArithmeticError::Overflow)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}
