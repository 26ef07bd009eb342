use itertools::Itertools;
use nalgebra::{Point2, Point3, Vector3};
use simba::scalar::SupersetOf;

use crate::error::LatheError;
use crate::misc::FloatingPoint;

use super::{RevolutionConfig, MIN_SEGMENTS};

/// Indexed triangle mesh of a surface of revolution
///
/// Vertices form a `rows x cols` grid stored row-major:
/// row `r` is the `r`-th profile point, column `c` its `c`-th angular copy,
/// and the vertex lives at `r * cols + c`.
#[derive(Clone, Debug, PartialEq)]
pub struct RevolutionMesh<T: FloatingPoint> {
    positions: Vec<Point3<T>>,
    normals: Vec<Vector3<T>>,
    indices: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl<T: FloatingPoint> RevolutionMesh<T> {
    /// Revolve a sampled profile around the configured axis
    ///
    /// Every grid cell between rows `r, r + 1` and columns `c, c + 1` is split into
    /// the triangles `(a, b, c2)` and `(a, c2, d)` where
    /// `a = (r, c)`, `b = (r + 1, c)`, `c2 = (r + 1, c + 1)` and `d = (r, c + 1)`.
    /// Vertex normals are the normalized sum of the face normals around each vertex.
    ///
    /// # Failures
    /// - if the profile has less than 2 points
    /// - if there are less than 3 segments
    /// - if the angle is not in (0, 360] degrees
    /// - if the vertex count does not fit in `u32` indices
    ///
    /// # Example
    /// ```
    /// use lathe::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let profile = vec![Point2::new(0., 0.), Point2::new(1., 0.)];
    /// let config = RevolutionConfig::new(Axis::Y, 360., 4);
    /// let mesh = RevolutionMesh::try_revolve(&profile, &config).unwrap();
    /// assert_eq!(mesh.rows(), 2);
    /// assert_eq!(mesh.cols(), 4);
    /// assert_eq!(mesh.triangle_count(), 8);
    /// ```
    pub fn try_revolve(
        profile: &[Point2<T>],
        config: &RevolutionConfig<T>,
    ) -> Result<Self, LatheError> {
        let rows = profile.len();
        if rows < 2 {
            return Err(LatheError::InvalidMeshParameters(format!(
                "profile needs at least 2 points, got {}",
                rows
            )));
        }
        if config.segments < MIN_SEGMENTS {
            return Err(LatheError::InvalidMeshParameters(format!(
                "revolution needs at least {} segments, got {}",
                MIN_SEGMENTS, config.segments
            )));
        }
        // past a full turn only while still within the closure tolerance
        let full_turn = T::constant(360.);
        let degrees = config.angle_degrees;
        if !(degrees > T::zero() && (degrees <= full_turn || config.is_closed())) {
            return Err(LatheError::InvalidMeshParameters(format!(
                "revolution angle must be in (0, 360] degrees, got {}",
                config.angle_degrees
            )));
        }

        let segments = config.segments;
        let closed = config.is_closed();
        let cols = config.columns();
        let vertex_count = rows
            .checked_mul(cols)
            .filter(|n| *n <= u32::MAX as usize)
            .ok_or_else(|| {
                LatheError::InvalidMeshParameters(format!(
                    "{} x {} vertices cannot be addressed by 32 bit indices",
                    rows, cols
                ))
            })?;

        let angle = config.angle_radians();
        let positions: Vec<_> = profile
            .iter()
            .map(|p| config.to_axis_frame(p))
            .flat_map(move |p| {
                (0..cols).map(move |c| {
                    let theta = T::from_count(c) / T::from_count(segments) * angle;
                    config.axis.rotate(&p, theta)
                })
            })
            .collect();

        let index = |r: usize, c: usize| (r * cols + c % cols) as u32;

        // an open sweep has no cell between its last and first columns
        let cells = if closed { cols } else { segments };
        let mut indices = Vec::with_capacity((rows - 1) * cells * 6);
        let mut accumulated = vec![Vector3::<T>::zeros(); vertex_count];

        for (r0, r1) in (0..rows).tuple_windows() {
            for c in 0..cells {
                let a = index(r0, c);
                let b = index(r1, c);
                let c2 = index(r1, c + 1);
                let d = index(r0, c + 1);
                indices.extend_from_slice(&[a, b, c2, a, c2, d]);

                // both triangles of the cell share the normal of (a, b, c2)
                let pa = &positions[a as usize];
                let normal = (positions[b as usize] - pa).cross(&(positions[c2 as usize] - pa));
                for i in [a, b, c2, a, c2, d] {
                    accumulated[i as usize] += normal;
                }
            }
        }

        let fallback = config.axis.direction::<T>();
        let normals: Vec<_> = accumulated
            .into_iter()
            .map(|n| n.try_normalize(T::zero()).unwrap_or(fallback))
            .collect();

        #[cfg(feature = "log")]
        {
            let degenerate = normals.iter().filter(|n| **n == fallback).count();
            log::debug!(
                "revolved {} profile points about {} into a {}x{} grid ({} triangles, {} fallback normals)",
                rows,
                config.axis,
                rows,
                cols,
                indices.len() / 3,
                degenerate
            );
        }

        Ok(Self {
            positions,
            normals,
            indices,
            rows,
            cols,
        })
    }

    pub fn positions(&self) -> &[Point3<T>] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }

    /// Triangle indices, three per triangle
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of profile points
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of angular columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flat index of the vertex at profile row `r` and angular column `c`
    pub fn vertex_index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Arithmetic mean of the three vertex normals of a triangle (not renormalized)
    pub fn facet_normal(&self, triangle: [u32; 3]) -> Vector3<T> {
        let sum = triangle
            .iter()
            .fold(Vector3::zeros(), |acc, i| acc + self.normals[*i as usize]);
        sum / T::constant(3.)
    }

    /// Positions flattened into `x, y, z` triples
    pub fn flat_positions(&self) -> Vec<T> {
        self.positions
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }

    /// Normals flattened into `x, y, z` triples
    pub fn flat_normals(&self) -> Vec<T> {
        self.normals.iter().flat_map(|n| [n.x, n.y, n.z]).collect()
    }

    /// Cast the mesh to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> RevolutionMesh<F> {
        RevolutionMesh {
            positions: self.positions.iter().map(|p| p.cast()).collect(),
            normals: self.normals.iter().map(|n| n.cast()).collect(),
            indices: self.indices.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}
