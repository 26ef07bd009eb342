use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use crate::misc::FloatingPoint;
use crate::profile::{ControlPoint, CurveConfig};
use crate::revolution::{Revolution, RevolutionConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RevolutionPayload<'a, T: FloatingPoint> {
    config: ConfigPayload<'a, T>,
    mesh: MeshPayload<'a, T>,
    control_points: &'a [ControlPoint<T>],
}

#[derive(Serialize)]
struct ConfigPayload<'a, T: FloatingPoint> {
    curve: &'a CurveConfig,
    revolution: &'a RevolutionConfig<T>,
}

#[derive(Serialize)]
struct MeshPayload<'a, T: FloatingPoint> {
    positions: Vec<T>,
    normals: Vec<T>,
    indices: &'a [u32],
    rows: usize,
    cols: usize,
}

impl<'a, T: FloatingPoint> From<&'a Revolution<T>> for RevolutionPayload<'a, T> {
    fn from(revolution: &'a Revolution<T>) -> Self {
        let mesh = revolution.mesh();
        Self {
            config: ConfigPayload {
                curve: revolution.curve_config(),
                revolution: revolution.revolution_config(),
            },
            mesh: MeshPayload {
                positions: mesh.flat_positions(),
                normals: mesh.flat_normals(),
                indices: mesh.indices(),
                rows: mesh.rows(),
                cols: mesh.cols(),
            },
            control_points: revolution.control_points(),
        }
    }
}

/// Serialize a generation request and its mesh as pretty printed JSON
///
/// The document has the shape
/// `{ config: { curve, revolution }, mesh: { positions, normals, indices, rows, cols }, controlPoints }`
/// where `positions` and `normals` are flat `x, y, z` arrays.
pub fn to_json<T: FloatingPoint + Serialize>(revolution: &Revolution<T>) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&RevolutionPayload::from(revolution))
        .context("failed to serialize revolution to JSON")
}

/// Write a generation request and its mesh as pretty printed JSON
pub fn write_json<T: FloatingPoint + Serialize, W: Write>(
    revolution: &Revolution<T>,
    writer: &mut W,
) -> anyhow::Result<()> {
    let json = to_json(revolution)?;
    writer
        .write_all(json.as_bytes())
        .context("failed to write JSON")
}
