use super::{Extrusion, Mesh};
use crate::{Corridor, Triangulator, ring::orient_polygon, triangulate::corners};
use geo::{LineString, Polygon};

const UP: [f64; 3] = [0.0, 0.0, 1.0];

/// Unit normal of the triangle `a, b, c` by the right-hand rule.
///
/// Falls back to `+Z` when the corners are collinear.
pub fn compute_normal(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> [f64; 3] {
	let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
	let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
	let n = [
		u[1] * v[2] - u[2] * v[1],
		u[2] * v[0] - u[0] * v[2],
		u[0] * v[1] - u[1] * v[0],
	];
	let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
	if length == 0.0 {
		return UP;
	}
	[n[0] / length, n[1] / length, n[2] / length]
}

/// Collects slabs and prisms into one mesh.
#[derive(Debug)]
pub struct MeshAssembler {
	triangulator: Triangulator,
	mesh: Mesh,
}

impl MeshAssembler {
	#[must_use]
	pub fn new(triangulator: Triangulator) -> Self {
		Self {
			triangulator,
			mesh: Mesh::new(),
		}
	}

	pub fn add_corridor(&mut self, corridor: &Corridor, extrusion: Extrusion) {
		for polygon in &corridor.polygons {
			self.add_polygon(polygon, extrusion);
		}
	}

	pub fn add_polygon(&mut self, polygon: &Polygon<f64>, extrusion: Extrusion) {
		match extrusion {
			Extrusion::Slab { elevation } => self.add_cap(polygon, elevation),
			Extrusion::Prism {
				bottom,
				top,
				double_sided,
			} => {
				let polygon = orient_polygon(polygon);
				self.add_walls(polygon.exterior(), bottom, top, double_sided);
				for hole in polygon.interiors() {
					self.add_walls(hole, bottom, top, double_sided);
				}
				self.add_cap(&polygon, top);
			}
		}
	}

	/// An upward-facing surface at `z`.
	fn add_cap(&mut self, polygon: &Polygon<f64>, z: f64) {
		for triangle in self.triangulator.triangulate(polygon) {
			let [a, b, c] = corners(&triangle).map(|[x, y]| [x, y, z]);
			let normal = compute_normal(a, b, c);
			if normal[2] < 0.0 {
				self.mesh.add_triangle([a, c, b], negate(normal));
			} else {
				self.mesh.add_triangle([a, b, c], normal);
			}
		}
	}

	/// One vertical quad per ring edge, zero-length edges skipped.
	///
	/// With a counter-clockwise exterior and clockwise holes the normals face out of the solid.
	fn add_walls(&mut self, ring: &LineString<f64>, bottom: f64, top: f64, double_sided: bool) {
		for line in ring.lines() {
			if line.start == line.end {
				continue;
			}
			let bottom_left = [line.start.x, line.start.y, bottom];
			let bottom_right = [line.end.x, line.end.y, bottom];
			let top_right = [line.end.x, line.end.y, top];
			let top_left = [line.start.x, line.start.y, top];
			let normal = compute_normal(bottom_left, bottom_right, top_left);

			self.mesh.add_triangle([bottom_left, bottom_right, top_right], normal);
			self.mesh.add_triangle([bottom_left, top_right, top_left], normal);
			if double_sided {
				let back = negate(normal);
				self.mesh.add_triangle([bottom_left, top_right, bottom_right], back);
				self.mesh.add_triangle([bottom_left, top_left, top_right], back);
			}
		}
	}

	pub fn finish(self) -> Mesh {
		self.mesh
	}
}

fn negate(v: [f64; 3]) -> [f64; 3] {
	[-v[0], -v[1], -v[2]]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ring::polygon_from_rings;
	use approx::assert_relative_eq;
	use mapmesh_core::GeometryConfig;

	fn assembler() -> MeshAssembler {
		MeshAssembler::new(Triangulator::new(&GeometryConfig::default()))
	}

	fn unit_square(clockwise: bool) -> Polygon<f64> {
		let mut ring = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];
		if clockwise {
			ring.reverse();
		}
		polygon_from_rings(&ring, &[])
	}

	fn face_normal(mesh: &Mesh, face: usize) -> [f64; 3] {
		mesh.normals[mesh.faces[face][0].normal - 1]
	}

	// ── compute_normal ──

	#[test]
	fn normal_of_wall_and_degenerate_triangle() {
		let n = compute_normal([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
		assert_relative_eq!(n[1], -1.0);
		assert_eq!(compute_normal([0.0; 3], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]), UP);
	}

	// ── slab ──

	#[test]
	fn slab_faces_up_regardless_of_winding() {
		for clockwise in [false, true] {
			let mut assembler = assembler();
			assembler.add_polygon(&unit_square(clockwise), Extrusion::Slab { elevation: 0.05 });
			let mesh = assembler.finish();
			assert_eq!(mesh.face_count(), 2);
			assert!(mesh.vertices.iter().all(|v| v[2] == 0.05));
			for face in 0..mesh.face_count() {
				assert_eq!(face_normal(&mesh, face), UP);
			}
		}
	}

	// ── prism ──

	#[test]
	fn prism_walls_face_outwards() {
		let mut assembler = assembler();
		let prism = Extrusion::Prism {
			bottom: 0.0,
			top: 3.0,
			double_sided: false,
		};
		assembler.add_polygon(&unit_square(true), prism);
		let mesh = assembler.finish();
		// four walls of two triangles plus a two triangle roof
		assert_eq!(mesh.face_count(), 10);
		for face in 0..8 {
			let normal = face_normal(&mesh, face);
			let corner = mesh.vertices[mesh.faces[face][0].vertex - 1];
			let to_centre = [0.5 - corner[0], 0.5 - corner[1]];
			assert!(normal[0] * to_centre[0] + normal[1] * to_centre[1] < 0.0);
			assert_relative_eq!(normal[2], 0.0);
		}
		assert_eq!(face_normal(&mesh, 8), UP);
	}

	#[test]
	fn hole_walls_face_into_the_hole() {
		let exterior = vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]];
		let hole = vec![[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0], [4.0, 4.0]];
		let mut assembler = assembler();
		let prism = Extrusion::Prism {
			bottom: 0.0,
			top: 1.0,
			double_sided: false,
		};
		assembler.add_polygon(&polygon_from_rings(&exterior, &[hole]), prism);
		let mesh = assembler.finish();
		// hole walls are faces 8..16, their normals point to the hole centre
		for face in 8..16 {
			let normal = face_normal(&mesh, face);
			let corner = mesh.vertices[mesh.faces[face][0].vertex - 1];
			let to_centre = [5.0 - corner[0], 5.0 - corner[1]];
			assert!(normal[0] * to_centre[0] + normal[1] * to_centre[1] > 0.0);
		}
	}

	#[test]
	fn double_sided_walls_repeat_reversed() {
		let mut assembler = assembler();
		let prism = Extrusion::Prism {
			bottom: 0.0,
			top: 3.0,
			double_sided: true,
		};
		assembler.add_polygon(&unit_square(false), prism);
		let mesh = assembler.finish();
		assert_eq!(mesh.face_count(), 4 * 4 + 2);
		let front = face_normal(&mesh, 0);
		let back = face_normal(&mesh, 2);
		assert_eq!(back, negate(front));
		let front_corners: Vec<_> = mesh.faces[0].iter().map(|f| mesh.vertices[f.vertex - 1]).collect();
		let back_corners: Vec<_> = mesh.faces[2].iter().map(|f| mesh.vertices[f.vertex - 1]).collect();
		assert_eq!(back_corners, vec![front_corners[0], front_corners[2], front_corners[1]]);
	}

	#[test]
	fn zero_length_edges_are_skipped() {
		let ring = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]];
		let mut assembler = assembler();
		let prism = Extrusion::Prism {
			bottom: 0.0,
			top: 1.0,
			double_sided: false,
		};
		assembler.add_polygon(&polygon_from_rings(&ring, &[]), prism);
		let mesh = assembler.finish();
		assert!(mesh.face_count() >= 10);
		let walls = mesh.faces.iter().filter(|face| mesh.normals[face[0].normal - 1][2] == 0.0).count();
		assert_eq!(walls, 8);
	}
}
