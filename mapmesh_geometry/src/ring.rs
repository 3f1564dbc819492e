//! Ring level helpers: winding, closure and conversion between `[x, y]` lists and `geo` types.

use geo::{Coord, LineString, Polygon};
use mapmesh_core::RingCoords;

/// Signed area of a ring by the shoelace formula.
///
/// Positive for counter-clockwise rings, negative for clockwise ones. The ring may or may
/// not repeat its first point at the end.
pub fn signed_area(ring: &[[f64; 2]]) -> f64 {
	if ring.len() < 3 {
		return 0.0;
	}
	let mut sum = 0.0;
	for (index, [x1, y1]) in ring.iter().enumerate() {
		let [x2, y2] = ring[(index + 1) % ring.len()];
		sum += x1 * y2 - x2 * y1;
	}
	sum / 2.0
}

/// Shoelace area of a `geo` ring.
pub fn line_string_signed_area(ring: &LineString<f64>) -> f64 {
	let mut sum = 0.0;
	for line in ring.lines() {
		sum += line.start.x * line.end.y - line.end.x * line.start.y;
	}
	sum / 2.0
}

/// Appends the first point if the ring is not closed yet.
pub fn close_ring(mut ring: RingCoords) -> RingCoords {
	if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied())
		&& first != last
	{
		ring.push(first);
	}
	ring
}

/// Whether the ring has at least three distinct points.
pub fn has_area_support(ring: &[[f64; 2]]) -> bool {
	let mut distinct: Vec<[f64; 2]> = Vec::with_capacity(3);
	for point in ring {
		if !distinct.contains(point) {
			distinct.push(*point);
			if distinct.len() == 3 {
				return true;
			}
		}
	}
	false
}

/// Returns `ring` reversed if its winding differs from the requested one.
fn orient_ring(ring: &LineString<f64>, counter_clockwise: bool) -> LineString<f64> {
	let area = line_string_signed_area(ring);
	if (area < 0.0 && counter_clockwise) || (area > 0.0 && !counter_clockwise) {
		LineString::new(ring.0.iter().rev().copied().collect())
	} else {
		ring.clone()
	}
}

/// Orients the exterior counter-clockwise and every hole clockwise.
pub fn orient_polygon(polygon: &Polygon<f64>) -> Polygon<f64> {
	Polygon::new(
		orient_ring(polygon.exterior(), true),
		polygon.interiors().iter().map(|hole| orient_ring(hole, false)).collect(),
	)
}

pub fn ring_to_line_string(ring: &[[f64; 2]]) -> LineString<f64> {
	LineString::new(ring.iter().map(|&[x, y]| Coord { x, y }).collect())
}

pub fn line_string_to_ring(line: &LineString<f64>) -> RingCoords {
	line.coords().map(|coord| [coord.x, coord.y]).collect()
}

/// Builds a polygon from an exterior and holes. Open rings are closed.
pub fn polygon_from_rings(exterior: &[[f64; 2]], holes: &[RingCoords]) -> Polygon<f64> {
	Polygon::new(
		ring_to_line_string(exterior),
		holes.iter().map(|hole| ring_to_line_string(hole)).collect(),
	)
}

/// Splits a polygon into its exterior and hole rings, each explicitly closed.
pub fn polygon_to_rings(polygon: &Polygon<f64>) -> (RingCoords, Vec<RingCoords>) {
	(
		line_string_to_ring(polygon.exterior()),
		polygon.interiors().iter().map(line_string_to_ring).collect(),
	)
}
