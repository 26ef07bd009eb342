use std::fmt;
use std::io::Write;

use crate::misc::FloatingPoint;
use crate::revolution::RevolutionMesh;

/// Wavefront OBJ text of a mesh, written on display
///
/// One `v` line per vertex and one `vn` line per normal with six decimals,
/// then one `f a//a b//b c//c` line per triangle.
/// OBJ indices start at 1 and each vertex uses the normal with the same index.
pub struct ObjText<'a, T: FloatingPoint>(pub &'a RevolutionMesh<T>);

impl<T: FloatingPoint> fmt::Display for ObjText<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.0;
        for p in mesh.positions() {
            writeln!(f, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
        }
        for n in mesh.normals() {
            writeln!(f, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
        }
        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (a + 1, b + 1, c + 1);
            writeln!(f, "f {a}//{a} {b}//{b} {c}//{c}")?;
        }
        Ok(())
    }
}

/// Convert a mesh to Wavefront OBJ text
pub fn to_obj<T: FloatingPoint>(mesh: &RevolutionMesh<T>) -> String {
    ObjText(mesh).to_string()
}

/// Write a mesh as Wavefront OBJ text
pub fn write_obj<T: FloatingPoint, W: Write>(
    mesh: &RevolutionMesh<T>,
    writer: &mut W,
) -> std::io::Result<()> {
    write!(writer, "{}", ObjText(mesh))
}
