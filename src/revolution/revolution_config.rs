use nalgebra::Point2;

use crate::misc::FloatingPoint;

use super::Axis;

/// A sweep whose angle is within this many degrees of a full turn is closed
pub const CLOSURE_TOLERANCE_DEGREES: f64 = 1e-6;

/// Minimum number of angular segments of a revolution
pub const MIN_SEGMENTS: usize = 3;

/// Options for revolving a profile around an axis
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RevolutionConfig<T: FloatingPoint> {
    pub axis: Axis,
    /// Sweep angle in degrees, in (0, 360]
    pub angle_degrees: T,
    /// Number of angular segments, at least 3
    pub segments: usize,
    /// Origin of the axis in profile space
    pub pivot: Point2<T>,
}

impl<T: FloatingPoint> Default for RevolutionConfig<T> {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            angle_degrees: T::constant(360.),
            segments: 64,
            pivot: Point2::origin(),
        }
    }
}

impl<T: FloatingPoint> RevolutionConfig<T> {
    pub fn new(axis: Axis, angle_degrees: T, segments: usize) -> Self {
        Self {
            axis,
            angle_degrees,
            segments,
            ..Default::default()
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_angle_degrees(mut self, angle_degrees: T) -> Self {
        self.angle_degrees = angle_degrees;
        self
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_pivot(mut self, pivot: Point2<T>) -> Self {
        self.pivot = pivot;
        self
    }

    /// Whether the sweep is a full turn, joining its last column back to the first
    pub fn is_closed(&self) -> bool {
        (self.angle_degrees - T::constant(360.)).abs() < T::constant(CLOSURE_TOLERANCE_DEGREES)
    }

    /// Number of distinct angular columns of vertices
    pub fn columns(&self) -> usize {
        if self.is_closed() {
            self.segments
        } else {
            self.segments + 1
        }
    }

    pub fn angle_radians(&self) -> T {
        self.angle_degrees * T::pi() / T::constant(180.)
    }

    /// Express a profile point relative to the pivot with the vertical direction flipped,
    /// so that profile (screen) y grows downward while the revolved solid's y grows upward.
    pub fn to_axis_frame(&self, p: &Point2<T>) -> Point2<T> {
        Point2::new(p.x - self.pivot.x, self.pivot.y - p.y)
    }
}
