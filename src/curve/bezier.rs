use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use crate::misc::FloatingPoint;

/// Evaluate a Bézier curve at `t` by De Casteljau's algorithm
/// (repeated linear interpolation between neighbouring control points).
///
/// A single control point is returned as is for every `t`.
/// Returns `None` if there are no control points.
///
/// # Example
/// ```
/// use lathe::prelude::*;
/// use nalgebra::Point2;
///
/// let control_points = vec![Point2::new(0., 0.), Point2::new(1., 2.), Point2::new(2., 0.)];
/// let p = eval_bezier(&control_points, 0.5).unwrap();
/// assert_eq!(p, Point2::new(1., 1.));
/// ```
pub fn eval_bezier<T: FloatingPoint, D: DimName>(
    control_points: &[OPoint<T, D>],
    t: T,
) -> Option<OPoint<T, D>>
where
    DefaultAllocator: Allocator<D>,
{
    let n = control_points.len().checked_sub(1)?;
    let mut temp = control_points.to_vec();
    for r in 1..=n {
        for i in 0..=(n - r) {
            temp[i] = lerp(&temp[i], &temp[i + 1], t);
        }
    }
    temp.into_iter().next()
}

/// `(1 - t) * a + t * b`
pub(crate) fn lerp<T: FloatingPoint, D: DimName>(
    a: &OPoint<T, D>,
    b: &OPoint<T, D>,
    t: T,
) -> OPoint<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    OPoint::from(&a.coords * (T::one() - t) + &b.coords * t)
}
