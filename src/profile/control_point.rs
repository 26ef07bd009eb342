use nalgebra::Point2;

use crate::misc::FloatingPoint;

/// A user placed control point of the profile curve
///
/// `weight` is kept alongside the position and serialized with it,
/// but neither curve evaluator reads it: the curves are polynomial, not rational.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint<T> {
    pub x: T,
    pub y: T,
    pub weight: T,
}

impl<T: FloatingPoint> ControlPoint<T> {
    /// Create a control point with a unit weight
    pub fn new(x: T, y: T) -> Self {
        Self {
            x,
            y,
            weight: T::one(),
        }
    }

    pub fn with_weight(mut self, weight: T) -> Self {
        self.weight = weight;
        self
    }

    pub fn position(&self) -> Point2<T> {
        Point2::new(self.x, self.y)
    }
}

impl<T: FloatingPoint> From<Point2<T>> for ControlPoint<T> {
    fn from(p: Point2<T>) -> Self {
        Self::new(p.x, p.y)
    }
}
