use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Lift an `f64` constant into the scalar type
    fn constant(value: f64) -> Self {
        convert(value)
    }

    /// Lift a count or an index into the scalar type
    fn from_count(count: usize) -> Self {
        convert(count as f64)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
