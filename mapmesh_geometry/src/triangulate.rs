//! Triangulation of polygons with holes.
//!
//! Convex polygons without holes are fanned from their first vertex. Everything else goes
//! through a constrained Delaunay triangulation of all rings, whose triangles are then kept
//! only if their centroid lies inside the polygon, which removes triangles outside the
//! exterior and inside holes. Every returned triangle winds counter-clockwise.

use crate::ring::{line_string_signed_area, orient_polygon};
use geo::{
	Area, Centroid, Contains, Coord, IsConvex, Polygon, Triangle, TriangulateEarcut, TriangulateSpade,
	algorithm::triangulate_spade::SpadeTriangulationConfig,
};
use mapmesh_core::GeometryConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Triangulator {
	snap_radius: f64,
}

impl Triangulator {
	#[must_use]
	pub fn new(config: &GeometryConfig) -> Self {
		Self {
			snap_radius: config.snap_radius,
		}
	}

	/// Triangulates `polygon`. Degenerate input yields no triangles.
	pub fn triangulate(&self, polygon: &Polygon<f64>) -> Vec<Triangle<f64>> {
		if polygon.exterior().0.len() < 4 || line_string_signed_area(polygon.exterior()) == 0.0 {
			return Vec::new();
		}
		let polygon = orient_polygon(polygon);

		let candidates = if polygon.interiors().is_empty() && polygon.exterior().is_convex() {
			fan(&polygon)
		} else {
			self.constrained(&polygon)
		};

		candidates
			.into_iter()
			.filter(|triangle| triangle.signed_area() != 0.0)
			.map(counter_clockwise)
			.collect()
	}

	fn constrained(&self, polygon: &Polygon<f64>) -> Vec<Triangle<f64>> {
		let config = SpadeTriangulationConfig {
			snap_radius: self.snap_radius,
		};
		let triangles = match polygon.constrained_outer_triangulation(config) {
			Ok(triangles) => triangles,
			Err(err) => {
				log::warn!("constrained triangulation failed ({err:?}), using ear clipping");
				polygon.earcut_triangles()
			}
		};
		triangles
			.into_iter()
			.filter(|triangle| polygon.contains(&triangle.centroid()))
			.collect()
	}
}

/// Fan from the first vertex. Only valid for convex rings.
fn fan(polygon: &Polygon<f64>) -> Vec<Triangle<f64>> {
	let ring = &polygon.exterior().0;
	let open = &ring[..ring.len() - 1];
	open
		.windows(2)
		.skip(1)
		.map(|pair| Triangle::new(open[0], pair[0], pair[1]))
		.collect()
}

fn counter_clockwise(triangle: Triangle<f64>) -> Triangle<f64> {
	if triangle.signed_area() < 0.0 {
		Triangle::new(triangle.0, triangle.2, triangle.1)
	} else {
		triangle
	}
}

/// Triangle corners as `[x, y]`.
pub fn corners(triangle: &Triangle<f64>) -> [[f64; 2]; 3] {
	triangle.to_array().map(|Coord { x, y }| [x, y])
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ring::polygon_from_rings;
	use approx::assert_relative_eq;
	use geo::Point;
	use mapmesh_core::RingCoords;
	use rstest::rstest;

	fn triangulator() -> Triangulator {
		Triangulator::new(&GeometryConfig::default())
	}

	fn square(x0: f64, y0: f64, size: f64) -> RingCoords {
		vec![
			[x0, y0],
			[x0 + size, y0],
			[x0 + size, y0 + size],
			[x0, y0 + size],
			[x0, y0],
		]
	}

	fn total_area(triangles: &[Triangle<f64>]) -> f64 {
		triangles.iter().map(Area::unsigned_area).sum()
	}

	fn assert_counter_clockwise(triangles: &[Triangle<f64>]) {
		for triangle in triangles {
			assert!(triangle.signed_area() >= 0.0, "clockwise triangle {triangle:?}");
		}
	}

	#[rstest]
	#[case::convex(square(0.0, 0.0, 4.0), vec![], 16.0)]
	#[case::clockwise(square(0.0, 0.0, 4.0).into_iter().rev().collect(), vec![], 16.0)]
	#[case::concave_l(
		vec![[0.0, 0.0], [6.0, 0.0], [6.0, 2.0], [2.0, 2.0], [2.0, 6.0], [0.0, 6.0], [0.0, 0.0]],
		vec![],
		20.0
	)]
	#[case::hole(square(0.0, 0.0, 10.0), vec![square(4.0, 4.0, 2.0)], 96.0)]
	#[case::two_holes(square(0.0, 0.0, 10.0), vec![square(1.0, 1.0, 2.0), square(6.0, 6.0, 3.0)], 87.0)]
	#[case::u_shape(
		vec![[0.0, 0.0], [9.0, 0.0], [9.0, 9.0], [6.0, 9.0], [6.0, 3.0], [3.0, 3.0], [3.0, 9.0], [0.0, 9.0], [0.0, 0.0]],
		vec![],
		63.0
	)]
	fn area_is_conserved(#[case] exterior: RingCoords, #[case] holes: Vec<RingCoords>, #[case] area: f64) {
		let polygon = polygon_from_rings(&exterior, &holes);
		let triangles = triangulator().triangulate(&polygon);
		assert_relative_eq!(total_area(&triangles), area, epsilon = 1e-9);
		assert_counter_clockwise(&triangles);
	}

	#[test]
	fn no_triangle_inside_a_hole() {
		let hole = square(3.0, 3.0, 4.0);
		let hole_polygon = polygon_from_rings(&hole, &[]);
		let polygon = polygon_from_rings(&square(0.0, 0.0, 10.0), &[hole]);
		for triangle in triangulator().triangulate(&polygon) {
			let centroid: Point<f64> = triangle.centroid();
			assert!(!hole_polygon.contains(&centroid));
		}
	}

	#[test]
	fn fan_for_convex_polygons() {
		let polygon = polygon_from_rings(&[[0.0, 0.0], [4.0, 0.0], [5.0, 2.0], [2.0, 5.0], [-1.0, 2.0]], &[]);
		let triangles = triangulator().triangulate(&polygon);
		assert_eq!(triangles.len(), 3);
		for triangle in &triangles {
			assert_eq!(corners(triangle)[0], [0.0, 0.0]);
		}
	}

	#[rstest]
	#[case(vec![])]
	#[case(vec![[0.0, 0.0], [1.0, 1.0]])]
	#[case(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [0.0, 0.0]])]
	fn degenerate_input_yields_nothing(#[case] ring: RingCoords) {
		let polygon = polygon_from_rings(&ring, &[]);
		assert!(triangulator().triangulate(&polygon).is_empty());
	}
}
