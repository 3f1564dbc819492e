use mapmesh_core::RingCoords;

/// Builds a closed corridor ring from per-segment offset edges.
///
/// Every segment contributes its two endpoints shifted by `half_width` along the unit
/// perpendicular to the left and to the right. The ring is the left edge, the reversed right
/// edge and the first point again. Zero-length segments have a zero perpendicular, their
/// points sit on the centerline.
pub fn offset_ring(centerline: &[[f64; 2]], half_width: f64) -> RingCoords {
	let segments = centerline.len().saturating_sub(1);
	let mut left = Vec::with_capacity(segments * 2 + 1);
	let mut right = Vec::with_capacity(segments * 2);

	for pair in centerline.windows(2) {
		let [a, b] = [pair[0], pair[1]];
		let [nx, ny] = unit_perpendicular(a, b);
		let (ox, oy) = (nx * half_width, ny * half_width);
		left.push([a[0] + ox, a[1] + oy]);
		left.push([b[0] + ox, b[1] + oy]);
		right.push([a[0] - ox, a[1] - oy]);
		right.push([b[0] - ox, b[1] - oy]);
	}

	let mut ring = left;
	ring.extend(right.into_iter().rev());
	if let Some(first) = ring.first().copied() {
		ring.push(first);
	}
	ring
}

/// Left-hand unit normal of the segment `a -> b`, or zero for a degenerate segment.
fn unit_perpendicular(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
	let dx = b[0] - a[0];
	let dy = b[1] - a[1];
	let length = dx.hypot(dy);
	if length == 0.0 {
		return [0.0, 0.0];
	}
	[-dy / length, dx / length]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ring::signed_area;
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;

	#[test]
	fn straight_segment() {
		let ring = offset_ring(&[[0.0, 0.0], [100.0, 0.0]], 3.0);
		assert_eq!(
			ring,
			vec![[0.0, 3.0], [100.0, 3.0], [100.0, -3.0], [0.0, -3.0], [0.0, 3.0]]
		);
		assert_relative_eq!(signed_area(&ring).abs(), 600.0);
	}

	#[test]
	fn degenerate_segment_is_zero_filled() {
		let ring = offset_ring(&[[0.0, 0.0], [0.0, 0.0], [0.0, 10.0]], 1.0);
		assert!(ring.iter().all(|[x, y]| x.is_finite() && y.is_finite()));
		assert_eq!(&ring[0..2], &[[0.0, 0.0], [0.0, 0.0]]);
		assert_eq!(ring.first(), ring.last());
	}

	#[test]
	fn empty_centerline() {
		assert!(offset_ring(&[[1.0, 2.0]], 1.0).is_empty());
	}

	#[test]
	fn perpendicular_is_left_hand() {
		assert_eq!(unit_perpendicular([0.0, 0.0], [0.0, 2.0]), [-1.0, 0.0]);
		assert_eq!(unit_perpendicular([1.0, 1.0], [1.0, 1.0]), [0.0, 0.0]);
	}
}
