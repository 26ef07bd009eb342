use crate::error::LatheError;
use crate::misc::FloatingPoint;
use crate::profile::{sample_profile, ControlPoint, CurveConfig};

use super::{RevolutionConfig, RevolutionMesh};

/// One generation request: a snapshot of the inputs and the mesh built from them
///
/// The profile sampled in between is discarded once the mesh is built.
/// A new request produces a new `Revolution` rather than updating this one.
#[derive(Clone, Debug, PartialEq)]
pub struct Revolution<T: FloatingPoint> {
    control_points: Vec<ControlPoint<T>>,
    curve: CurveConfig,
    config: RevolutionConfig<T>,
    mesh: RevolutionMesh<T>,
}

impl<T: FloatingPoint> Revolution<T> {
    /// Sample the profile curve and revolve it
    ///
    /// # Failures
    /// - if the sampled profile has less than 2 points (e.g. a single control point B-spline)
    /// - if the revolution settings are invalid, see [`RevolutionMesh::try_revolve`]
    pub fn try_generate(
        control_points: Vec<ControlPoint<T>>,
        curve: CurveConfig,
        config: RevolutionConfig<T>,
    ) -> Result<Self, LatheError> {
        let profile = sample_profile(&control_points, &curve);
        let mesh = RevolutionMesh::try_revolve(&profile, &config)?;
        Ok(Self {
            control_points,
            curve,
            config,
            mesh,
        })
    }

    pub fn control_points(&self) -> &[ControlPoint<T>] {
        &self.control_points
    }

    pub fn curve_config(&self) -> &CurveConfig {
        &self.curve
    }

    pub fn revolution_config(&self) -> &RevolutionConfig<T> {
        &self.config
    }

    pub fn mesh(&self) -> &RevolutionMesh<T> {
        &self.mesh
    }

    pub fn into_mesh(self) -> RevolutionMesh<T> {
        self.mesh
    }
}
