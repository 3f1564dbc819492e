use super::Mesh;
use anyhow::Result;
use std::io::Write;

/// Writes `mesh` as Wavefront OBJ: all `v` lines, then all `vn` lines, then `f v//vn` faces.
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
	for [x, y, z] in &mesh.vertices {
		writeln!(writer, "v {x:.6} {y:.6} {z:.6}")?;
	}
	for [x, y, z] in &mesh.normals {
		// adding zero turns -0.0 into 0.0
		writeln!(writer, "vn {:.6} {:.6} {:.6}", x + 0.0, y + 0.0, z + 0.0)?;
	}
	for [a, b, c] in &mesh.faces {
		writeln!(
			writer,
			"f {}//{} {}//{} {}//{}",
			a.vertex, a.normal, b.vertex, b.normal, c.vertex, c.normal
		)?;
	}
	Ok(())
}
