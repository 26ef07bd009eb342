use std::fmt;
use std::str::FromStr;

use nalgebra::{Point2, Point3, Vector3};

use crate::error::LatheError;
use crate::misc::FloatingPoint;

/// Axis of revolution through the pivot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    /// Unit direction of the axis
    /// Also used as the normal of vertices whose neighbourhood collapsed to zero area.
    pub fn direction<T: FloatingPoint>(&self) -> Vector3<T> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }

    /// Rotate a point of the (pivot relative, y up) profile plane by `theta` radians
    pub fn rotate<T: FloatingPoint>(&self, p: &Point2<T>, theta: T) -> Point3<T> {
        let (sin, cos) = theta.sin_cos();
        match self {
            Axis::Y => Point3::new(p.x * cos, p.y, p.x * sin),
            Axis::X => Point3::new(p.x, p.y * cos, p.y * sin),
            Axis::Z => Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, T::zero()),
        }
    }
}

impl FromStr for Axis {
    type Err = LatheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(LatheError::InvalidAxis(s.to_string())),
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = LatheError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Axis> for String {
    fn from(axis: Axis) -> Self {
        axis.to_string()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
