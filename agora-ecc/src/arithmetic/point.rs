use super::modular::Coordinate;
use crate::ArithmeticError;

use std::fmt;

/// Short Weierstrass curve `y^2 = x^3 + a*x + b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve<T> {
    a: T,
    b: T,
}

impl<T: Coordinate> Curve<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &T {
        &self.a
    }

    pub fn b(&self) -> &T {
        &self.b
    }

    pub fn contains(&self, x: &T, y: &T) -> Result<bool, ArithmeticError> {
        let lhs = y.square()?;
        let x3 = x.square()?.mul(x)?;
        let ax = self.a.mul(x)?;
        let rhs = x3.add(&ax)?.add(&self.b)?;
        Ok(lhs == rhs)
    }

    pub fn point(&self, x: T, y: T) -> Result<Point<T>, ArithmeticError> {
        if self.contains(&x, &y)? {
            Ok(Point::Affine {
                x,
                y,
                curve: self.clone(),
            })
        } else {
            Err(ArithmeticError::NotOnCurve)
        }
    }

    pub fn infinity(&self) -> Point<T> {
        Point::Infinity {
            curve: self.clone(),
        }
    }
}

/// Point of a curve, either affine or the point at infinity.
///
/// An affine point always satisfies the equation of its curve, this is
/// checked whenever one is created. The point at infinity carries its curve as
/// well, so that adding it to a point of another curve is still rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point<T> {
    Infinity { curve: Curve<T> },
    Affine { x: T, y: T, curve: Curve<T> },
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Infinity { curve } => {
                writeln!(f, "infinity")?;
                write!(f, "a: {}, b: {}", curve.a, curve.b)
            }
            Self::Affine { x, y, curve } => {
                writeln!(f)?;
                writeln!(f, "x: {}", x)?;
                writeln!(f, "y: {}", y)?;
                write!(f, "a: {}, b: {}", curve.a, curve.b)
            }
        }
    }
}

impl<T: Coordinate> Point<T> {
    pub fn new(x: T, y: T, a: T, b: T) -> Result<Self, ArithmeticError> {
        Curve::new(a, b).point(x, y)
    }

    pub fn infinity(a: T, b: T) -> Self {
        Curve::new(a, b).infinity()
    }

    /// Builds a point from optional coordinates, where two missing
    /// coordinates denote the point at infinity.
    pub fn from_coordinates(
        x: Option<T>,
        y: Option<T>,
        a: T,
        b: T,
    ) -> Result<Self, ArithmeticError> {
        match (x, y) {
            (None, None) => Ok(Self::infinity(a, b)),
            (Some(x), Some(y)) => Self::new(x, y, a, b),
            _ => Err(ArithmeticError::NotOnCurve),
        }
    }

    pub fn curve(&self) -> &Curve<T> {
        match self {
            Self::Infinity { curve } | Self::Affine { curve, .. } => curve,
        }
    }

    pub fn a(&self) -> &T {
        self.curve().a()
    }

    pub fn b(&self) -> &T {
        self.curve().b()
    }

    pub fn x(&self) -> Option<&T> {
        match self {
            Self::Infinity { .. } => None,
            Self::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&T> {
        match self {
            Self::Infinity { .. } => None,
            Self::Affine { y, .. } => Some(y),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity { .. })
    }

    pub fn is_on_curve(&self) -> Result<bool, ArithmeticError> {
        match self {
            Self::Infinity { .. } => Ok(true),
            Self::Affine { x, y, curve } => curve.contains(x, y),
        }
    }

    pub fn add(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if self.curve() != rhs.curve() {
            return Err(ArithmeticError::CurveMismatch);
        }

        let (x1, y1, x2, y2, curve) = match (self, rhs) {
            (Self::Infinity { .. }, _) => return Ok(rhs.clone()),
            (_, Self::Infinity { .. }) => return Ok(self.clone()),
            (
                Self::Affine {
                    x: x1,
                    y: y1,
                    curve,
                },
                Self::Affine { x: x2, y: y2, .. },
            ) => (x1, y1, x2, y2, curve),
        };

        // vertical line through P and -P
        if x1 == x2 && y1 != y2 {
            return Ok(curve.infinity());
        }

        let (slope, x3) = if x1 != x2 {
            let slope = y1.sub(y2)?.div(&x1.sub(x2)?)?;
            let x3 = slope.square()?.sub(x1)?.sub(x2)?;
            (slope, x3)
        } else if y1.is_zero() {
            // the tangent is vertical, 2 * y1 has no inverse
            return Ok(curve.infinity());
        } else {
            let numerator = x1.square()?.triple()?.add(&curve.a)?;
            let slope = numerator.div(&y1.double()?)?;
            let x3 = slope.square()?.sub(&x1.double()?)?;
            (slope, x3)
        };

        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        curve.point(x3, y3)
    }

    pub fn neg(&self) -> Result<Self, ArithmeticError> {
        match self {
            Self::Infinity { .. } => Ok(self.clone()),
            Self::Affine { x, y, curve } => Ok(Self::Affine {
                x: x.clone(),
                y: y.negate()?,
                curve: curve.clone(),
            }),
        }
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        self.add(&rhs.neg()?)
    }

    pub fn double(&self) -> Result<Self, ArithmeticError> {
        self.add(self)
    }

    /// Computes `scalar * self` by double-and-add.
    pub fn scalar_mul(&self, scalar: u64) -> Result<Self, ArithmeticError> {
        let mut acc = self.curve().infinity();
        let mut current = self.clone();
        let mut remaining = scalar;
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = acc.add(&current)?;
            }
            remaining >>= 1;
            // the last doubling would be discarded
            if remaining > 0 {
                current = current.double()?;
            }
        }
        Ok(acc)
    }
}
