mod field;
mod modular;
mod point;

pub use field::FieldElement;
pub use modular::Coordinate;
pub use point::{Curve, Point};
