use std::fmt;
use std::str::FromStr;

use crate::misc::FloatingPoint;
use crate::revolution::RevolutionMesh;

/// How a viewer shades an installed mesh
/// It never changes the mesh itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RenderMode {
    /// Flat shaded faces
    #[default]
    Solid,
    Wire,
    /// Shaded with the interpolated vertex normals
    Smooth,
}

impl FromStr for RenderMode {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to [`RenderMode::Solid`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "wire" => RenderMode::Wire,
            "smooth" => RenderMode::Smooth,
            _ => RenderMode::Solid,
        })
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Solid => write!(f, "solid"),
            RenderMode::Wire => write!(f, "wire"),
            RenderMode::Smooth => write!(f, "smooth"),
        }
    }
}

/// Presentation side consumer of finished meshes
///
/// Implementations own whatever graphics resources they create for a mesh.
/// `load_mesh` must release the resources of the previously installed mesh
/// before installing the new one, and `clear` must release them without a replacement.
pub trait Viewer<T: FloatingPoint> {
    fn load_mesh(&mut self, mesh: &RevolutionMesh<T>, mode: RenderMode);
    fn clear(&mut self);
}
