use thiserror::Error;

/// Errors from curve evaluation and revolution meshing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatheError {
    /// A B-spline of the given degree needs at least `degree + 1` control points.
    ///
    /// Profile sampling never reports this: it falls back to the control polygon.
    #[error("too few control points for a degree {degree} B-spline: got {control_points}, need {}", degree + 1)]
    InsufficientControlPoints { control_points: usize, degree: usize },

    /// The knot vector length does not match `control points + degree + 1`.
    #[error("invalid number of knots, got {actual}, expected {expected}")]
    InvalidKnotVector { expected: usize, actual: usize },

    /// The profile or the revolution settings cannot produce a mesh.
    #[error("invalid mesh parameters: {0}")]
    InvalidMeshParameters(String),

    /// The revolution axis is not one of X, Y or Z.
    #[error("invalid revolution axis: {0:?}")]
    InvalidAxis(String),

    /// The curve kind is neither Bézier nor B-spline.
    #[error("invalid curve kind: {0:?}")]
    InvalidCurveKind(String),
}
