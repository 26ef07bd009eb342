pub mod obj;
pub mod stl;
pub use obj::*;
pub use stl::*;

#[cfg(feature = "serde")]
pub mod json;
#[cfg(feature = "serde")]
pub use json::*;

use std::fmt;
use std::io::Write;

use anyhow::Context;

use crate::misc::FloatingPoint;
use crate::revolution::Revolution;

/// Stem of the default export file names and the name of exported STL solids
pub const DEFAULT_EXPORT_NAME: &str = "revolution";

/// Scalar types a [`Revolution`] can be exported with
#[cfg(feature = "serde")]
pub trait ExportScalar: FloatingPoint + serde::Serialize {}
#[cfg(feature = "serde")]
impl<T: FloatingPoint + serde::Serialize> ExportScalar for T {}

/// Scalar types a [`Revolution`] can be exported with
#[cfg(not(feature = "serde"))]
pub trait ExportScalar: FloatingPoint {}
#[cfg(not(feature = "serde"))]
impl<T: FloatingPoint> ExportScalar for T {}

/// File formats a revolution can be exported to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Wavefront OBJ with per vertex normals
    Obj,
    /// ASCII STL
    Stl,
    /// Inputs and mesh buffers as JSON
    #[cfg(feature = "serde")]
    Json,
}

impl MeshFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            MeshFormat::Obj => "obj",
            MeshFormat::Stl => "stl",
            #[cfg(feature = "serde")]
            MeshFormat::Json => "json",
        }
    }

    /// Find the format of a file extension, with or without the leading dot
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        match extension.as_str() {
            "obj" => Some(MeshFormat::Obj),
            "stl" => Some(MeshFormat::Stl),
            #[cfg(feature = "serde")]
            "json" => Some(MeshFormat::Json),
            _ => None,
        }
    }

    /// Suggested file name for a download, e.g. `revolution.obj`
    pub fn default_file_name(&self) -> String {
        format!("{}.{}", DEFAULT_EXPORT_NAME, self.extension())
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl<T: ExportScalar> Revolution<T> {
    /// Write this revolution in the given format
    ///
    /// # Example
    /// ```
    /// use lathe::prelude::*;
    ///
    /// let points = vec![ControlPoint::new(1., 0.), ControlPoint::new(1., -2.)];
    /// let revolution = Revolution::try_generate(
    ///     points,
    ///     CurveConfig::bezier().with_sample_count(8),
    ///     RevolutionConfig::new(Axis::Y, 360., 8),
    /// )
    /// .unwrap();
    ///
    /// let mut buf = vec![];
    /// revolution.export(MeshFormat::Stl, &mut buf).unwrap();
    /// assert!(String::from_utf8(buf).unwrap().starts_with("solid revolution"));
    /// ```
    pub fn export<W: Write>(&self, format: MeshFormat, writer: &mut W) -> anyhow::Result<()> {
        #[cfg(feature = "log")]
        log::debug!(
            "exporting {} triangles as {}",
            self.mesh().triangle_count(),
            format
        );

        match format {
            MeshFormat::Obj => write_obj(self.mesh(), writer).context("failed to write OBJ"),
            MeshFormat::Stl => write_stl(self.mesh(), DEFAULT_EXPORT_NAME, writer)
                .context("failed to write STL"),
            #[cfg(feature = "serde")]
            MeshFormat::Json => write_json(self, writer),
        }
    }
}
