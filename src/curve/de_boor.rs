use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use crate::error::LatheError;
use crate::knot::KnotVector;
use crate::misc::FloatingPoint;

use super::bezier::lerp;

/// Keeps the parameter strictly inside the last knot span
/// and stands in for zero-width spans in the recursion.
pub const DE_BOOR_EPSILON: f64 = 1e-9;

/// Evaluate a B-spline curve at `t` by De Boor's algorithm.
///
/// `t` is clamped into `[0, 1 - 1e-9]`, so the knot vector is expected to span [0, 1]
/// (see [`KnotVector::try_open_uniform`]).
///
/// # Failures
/// - if the number of control points is less than the degree + 1
/// - if the number of knots is not equal to the number of control points + the degree + 1
///
/// # Example
/// ```
/// use lathe::prelude::*;
/// use nalgebra::Point2;
///
/// let control_points = vec![
///     Point2::new(0., 0.),
///     Point2::new(1., 2.),
///     Point2::new(3., 2.),
///     Point2::new(4., 0.),
/// ];
/// let knots = KnotVector::try_open_uniform(control_points.len(), 2).unwrap();
/// let start = eval_de_boor(&control_points, 2, &knots, 0.).unwrap();
/// assert_eq!(start, Point2::new(0., 0.));
/// ```
pub fn eval_de_boor<T: FloatingPoint, D: DimName>(
    control_points: &[OPoint<T, D>],
    degree: usize,
    knots: &KnotVector<T>,
    t: T,
) -> Result<OPoint<T, D>, LatheError>
where
    DefaultAllocator: Allocator<D>,
{
    let n = control_points.len();
    if n < degree + 1 {
        return Err(LatheError::InsufficientControlPoints {
            control_points: n,
            degree,
        });
    }
    if knots.len() != n + degree + 1 {
        return Err(LatheError::InvalidKnotVector {
            expected: n + degree + 1,
            actual: knots.len(),
        });
    }

    let eps = T::constant(DE_BOOR_EPSILON);
    let t = t.clamp(T::zero(), T::one() - eps);

    // spans below `degree` or above the last control point have no full support
    let last = knots.len() - degree - 2;
    let k = knots.find_span(t).unwrap_or(last).clamp(degree, last);

    let mut d: Vec<_> = (0..=degree)
        .map(|j| control_points[(k + j - degree).min(n - 1)].clone())
        .collect();

    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let i = k + j - degree;
            let denom = (knots[i + degree - r + 1] - knots[i]).max(eps);
            let alpha = (t - knots[i]) / denom;
            d[j] = lerp(&d[j - 1], &d[j], alpha);
        }
    }

    Ok(d.swap_remove(degree))
}
