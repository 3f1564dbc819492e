//! Triangle meshes and their assembly from extruded polygons.

mod assembler;
mod obj;
mod profile;

pub use assembler::{MeshAssembler, compute_normal};
pub use obj::write_obj;
pub use profile::Extrusion;

/// One corner of a face: 1-based vertex and normal indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceVertex {
	pub vertex: usize,
	pub normal: usize,
}

/// Vertices, per-face normals and triangular faces.
///
/// Every triangle gets its own three vertices and one normal, so indices grow strictly and
/// are never shared between faces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
	pub vertices: Vec<[f64; 3]>,
	pub normals: Vec<[f64; 3]>,
	pub faces: Vec<[FaceVertex; 3]>,
}

impl Mesh {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_triangle(&mut self, corners: [[f64; 3]; 3], normal: [f64; 3]) {
		self.normals.push(normal);
		let normal = self.normals.len();
		let face = corners.map(|corner| {
			self.vertices.push(corner);
			FaceVertex {
				vertex: self.vertices.len(),
				normal,
			}
		});
		self.faces.push(face);
	}

	pub fn is_empty(&self) -> bool {
		self.faces.is_empty()
	}

	pub fn face_count(&self) -> usize {
		self.faces.len()
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn indices_are_one_based_and_increasing() {
		let mut mesh = Mesh::new();
		assert!(mesh.is_empty());
		mesh.add_triangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], [0.0, 0.0, 1.0]);
		mesh.add_triangle([[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]], [0.0, 0.0, 1.0]);
		assert_eq!(mesh.vertex_count(), 6);
		assert_eq!(mesh.normals.len(), 2);
		assert_eq!(
			mesh.faces[1],
			[
				FaceVertex { vertex: 4, normal: 2 },
				FaceVertex { vertex: 5, normal: 2 },
				FaceVertex { vertex: 6, normal: 2 },
			]
		);
	}
}
