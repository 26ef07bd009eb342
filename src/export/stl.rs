use std::fmt;
use std::io::Write;

use crate::misc::FloatingPoint;
use crate::revolution::RevolutionMesh;

/// ASCII STL text of a mesh under a solid name, written on display
///
/// Each triangle becomes a facet whose normal is the mean of its three vertex normals.
pub struct StlText<'a, T: FloatingPoint> {
    pub mesh: &'a RevolutionMesh<T>,
    pub name: &'a str,
}

impl<T: FloatingPoint> fmt::Display for StlText<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solid {}", self.name)?;

        let positions = self.mesh.positions();
        for tri in self.mesh.triangles() {
            let normal = self.mesh.facet_normal(tri);
            writeln!(f, " facet normal {} {} {}", normal.x, normal.y, normal.z)?;
            writeln!(f, "  outer loop")?;
            for i in tri {
                let v = &positions[i as usize];
                writeln!(f, "   vertex {} {} {}", v.x, v.y, v.z)?;
            }
            writeln!(f, "  endloop")?;
            writeln!(f, " endfacet")?;
        }

        writeln!(f, "endsolid {}", self.name)
    }
}

/// Convert a mesh to ASCII STL text
pub fn to_stl<T: FloatingPoint>(mesh: &RevolutionMesh<T>, name: &str) -> String {
    StlText { mesh, name }.to_string()
}

/// Write a mesh as ASCII STL text
pub fn write_stl<T: FloatingPoint, W: Write>(
    mesh: &RevolutionMesh<T>,
    name: &str,
    writer: &mut W,
) -> std::io::Result<()> {
    write!(writer, "{}", StlText { mesh, name })
}
