use std::ops::Index;

use crate::error::LatheError;
use crate::misc::FloatingPoint;

/// Knot vector representation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotVector<T>(Vec<T>);

impl<T: FloatingPoint> KnotVector<T> {
    pub fn new(knots: Vec<T>) -> Self {
        Self(knots)
    }

    /// Create an open uniform (clamped) knot vector over the domain [0, 1]
    /// The first and last knots have a degree + 1 multiplicity,
    /// so the curve passes through its first and last control points.
    /// # Failures
    /// - if the number of control points is less than the degree + 1
    ///
    /// # Example
    /// ```
    /// use lathe::prelude::KnotVector;
    /// let knots: KnotVector<f64> = KnotVector::try_open_uniform(4, 2).unwrap();
    /// assert_eq!(knots.to_vec(), vec![0., 0., 0., 0.5, 1., 1., 1.]);
    /// ```
    pub fn try_open_uniform(control_count: usize, degree: usize) -> Result<Self, LatheError> {
        if control_count < degree + 1 {
            return Err(LatheError::InsufficientControlPoints {
                control_points: control_count,
                degree,
            });
        }

        let interior = control_count - degree - 1;
        let denom = T::from_count(interior + 1);

        let mut knots = Vec::with_capacity(control_count + degree + 1);
        knots.extend(std::iter::repeat_n(T::zero(), degree + 1));
        knots.extend((1..=interior).map(|i| T::from_count(i) / denom));
        knots.extend(std::iter::repeat_n(T::one(), degree + 1));
        Ok(Self(knots))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Find the knot span containing `t`:
    /// the first index `i` with `knots[i] <= t < knots[i + 1]`.
    /// Returns `None` when `t` lies before the first knot or at or past the last one.
    ///
    /// A non-decreasing sequence has at most one such index,
    /// so a binary search returns the same span as a front-to-back scan.
    ///
    /// # Example
    /// ```
    /// use lathe::prelude::KnotVector;
    /// let knots = KnotVector::new(vec![0., 0., 0., 0.5, 1., 1., 1.]);
    /// assert_eq!(knots.find_span(0.0), Some(2));
    /// assert_eq!(knots.find_span(0.5), Some(3));
    /// assert_eq!(knots.find_span(1.0), None);
    /// ```
    pub fn find_span(&self, t: T) -> Option<usize> {
        let count = self.0.partition_point(|knot| *knot <= t);
        if count == 0 || count >= self.0.len() {
            None
        } else {
            Some(count - 1)
        }
    }
}

impl<T> Index<usize> for KnotVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
