use nalgebra::Point2;

use crate::curve::{eval_bezier, eval_de_boor};
use crate::knot::KnotVector;
use crate::misc::FloatingPoint;

use super::{ControlPoint, CurveConfig, CurveKind};

/// Ordered samples of a profile curve in profile space
pub type Profile<T> = Vec<Point2<T>>;

/// Sample the profile curve described by `control_points` and `config`
///
/// The curve is evaluated at `config.divisions() + 1` uniformly spaced parameters in [0, 1].
/// A B-spline with fewer than `degree + 1` control points cannot be evaluated,
/// so the control polygon itself is returned as a straight line profile.
/// No control points give an empty profile.
///
/// Sampling never fails; callers that need a minimum number of points must check the length.
///
/// # Example
/// ```
/// use lathe::prelude::*;
///
/// let control_points = vec![
///     ControlPoint::new(0., 0.),
///     ControlPoint::new(1., 1.),
///     ControlPoint::new(2., 0.),
/// ];
/// let profile = sample_profile(&control_points, &CurveConfig::bezier().with_sample_count(16));
/// assert_eq!(profile.len(), 17);
///
/// // too few points for a cubic B-spline: the control polygon is used as is
/// let profile = sample_profile(&control_points, &CurveConfig::bspline(3));
/// assert_eq!(profile.len(), 3);
/// ```
pub fn sample_profile<T: FloatingPoint>(
    control_points: &[ControlPoint<T>],
    config: &CurveConfig,
) -> Profile<T> {
    if control_points.is_empty() {
        return vec![];
    }

    let points: Vec<Point2<T>> = control_points.iter().map(|p| p.position()).collect();
    let divisions = config.divisions();

    match config.kind {
        CurveKind::Bezier => sample_uniform(divisions, |t| eval_bezier(&points, t)),
        CurveKind::BSpline => {
            let degree = config.effective_degree();
            match KnotVector::try_open_uniform(points.len(), degree) {
                Ok(knots) => sample_uniform(divisions, |t| {
                    eval_de_boor(&points, degree, &knots, t).ok()
                }),
                Err(_e) => {
                    #[cfg(feature = "log")]
                    log::debug!("{}, falling back to the control polygon", _e);
                    points
                }
            }
        }
    }
}

fn sample_uniform<T: FloatingPoint>(
    divisions: usize,
    eval: impl Fn(T) -> Option<Point2<T>>,
) -> Profile<T> {
    let denom = T::from_count(divisions);
    (0..=divisions)
        .filter_map(|i| eval(T::from_count(i) / denom))
        .collect()
}
