use crate::ArithmeticError;

use num_integer::Integer;

use std::cmp::Ordering;
use std::fmt;

/// Element of the prime field of order `prime`.
///
/// The modulus is carried at runtime, so every binary operation checks that
/// both operands live in the same field before combining them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: u64,
    prime: u64,
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.prime)
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self::Output {
        FieldElement::neg(&self)
    }
}

impl std::ops::Neg for &FieldElement {
    type Output = FieldElement;
    fn neg(self) -> Self::Output {
        FieldElement::neg(self)
    }
}

impl FieldElement {
    /// Creates a field element, failing if `value` is outside `[0, prime)`.
    pub fn new(value: i128, prime: u64) -> Result<Self, ArithmeticError> {
        check_modulus(prime)?;
        if value < 0 || value >= i128::from(prime) {
            return Err(ArithmeticError::OutOfRange { value, prime });
        }
        // value is in [0, prime) here, so it fits into a u64
        Ok(Self {
            value: value as u64,
            prime,
        })
    }

    /// Maps an arbitrary integer into the field using a floor-style modulo.
    pub fn reduce(value: i128, prime: u64) -> Result<Self, ArithmeticError> {
        check_modulus(prime)?;
        Ok(Self {
            value: value.mod_floor(&i128::from(prime)) as u64,
            prime,
        })
    }

    pub fn zero(prime: u64) -> Result<Self, ArithmeticError> {
        Self::new(0, prime)
    }

    pub fn one(prime: u64) -> Result<Self, ArithmeticError> {
        Self::new(1, prime)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn prime(&self) -> u64 {
        self.prime
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.check_field(other)?;
        let sum = (u128::from(self.value) + u128::from(other.value)) % u128::from(self.prime);
        Ok(self.with_value(sum as u64))
    }

    pub fn sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.check_field(other)?;
        // the difference may be negative, mod_floor keeps it in [0, prime)
        let diff = (i128::from(self.value) - i128::from(other.value))
            .mod_floor(&i128::from(self.prime));
        Ok(self.with_value(diff as u64))
    }

    pub fn mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.check_field(other)?;
        Ok(self.with_value(mul_mod(self.value, other.value, self.prime)))
    }

    pub fn neg(&self) -> Self {
        if self.value == 0 {
            *self
        } else {
            self.with_value(self.prime - self.value)
        }
    }

    /// Raises the element to a signed power.
    ///
    /// For nonzero elements the exponent is first reduced modulo `prime - 1`
    /// (Fermat's little theorem), which also turns negative exponents into
    /// powers of the inverse.
    ///
    /// Zero has no inverse and the reduction does not hold for it: `0^0 = 1`,
    /// `0^k = 0` for `k > 0` (including `k = prime - 1`), and a negative
    /// exponent fails with `DivisionUndefined`.
    pub fn pow(&self, exponent: i128) -> Result<Self, ArithmeticError> {
        if self.value == 0 {
            return match exponent.cmp(&0) {
                Ordering::Less => Err(ArithmeticError::DivisionUndefined),
                Ordering::Equal => Ok(self.with_value(1)),
                Ordering::Greater => Ok(*self),
            };
        }
        let order = i128::from(self.prime - 1);
        let exponent = exponent.mod_floor(&order) as u64;
        Ok(self.with_value(pow_mod(self.value, exponent, self.prime)))
    }

    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        if self.value == 0 {
            return Err(ArithmeticError::DivisionUndefined);
        }
        Ok(self.with_value(pow_mod(self.value, self.prime - 2, self.prime)))
    }

    pub fn div(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.check_field(other)?;
        self.mul(&other.inverse()?)
    }

    fn with_value(&self, value: u64) -> Self {
        Self {
            value,
            prime: self.prime,
        }
    }

    fn check_field(&self, other: &Self) -> Result<(), ArithmeticError> {
        if self.prime == other.prime {
            Ok(())
        } else {
            Err(ArithmeticError::FieldMismatch(self.prime, other.prime))
        }
    }
}

fn check_modulus(prime: u64) -> Result<(), ArithmeticError> {
    if prime < 2 {
        Err(ArithmeticError::InvalidModulus(prime))
    } else {
        Ok(())
    }
}

fn mul_mod(lhs: u64, rhs: u64, modulus: u64) -> u64 {
    (u128::from(lhs) * u128::from(rhs) % u128::from(modulus)) as u64
}

// square-and-multiply, every intermediate stays below modulus^2 < 2^128
fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let mut base = base % modulus;
    let mut acc = 1 % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exponent >>= 1;
    }
    acc
}
