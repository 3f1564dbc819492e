//! Assembly of multipolygon relations from their member ways.
//!
//! Member ways are chains of points. Chains that share end points are stitched into closed
//! rings, `inner` rings cut holes into the `outer` rings containing them.

use crate::{merge::repair, ring::polygon_from_rings};
use geo::{Area, BooleanOps, Contains, MultiPolygon, Polygon, unary_union};
use mapmesh_core::RingCoords;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
	Outer,
	Inner,
}

impl Role {
	/// `inner` is a hole, every other role (including none) an outer ring.
	pub fn parse(role: &str) -> Role {
		if role.trim().eq_ignore_ascii_case("inner") {
			Role::Inner
		} else {
			Role::Outer
		}
	}
}

fn is_closed_ring(chain: &[[f64; 2]]) -> bool {
	chain.len() >= 4 && chain.first() == chain.last()
}

/// Stitches chains end to end into closed rings. Chains may be reversed to fit.
/// Chains that cannot be closed are discarded.
pub fn stitch_rings(chains: Vec<RingCoords>) -> Vec<RingCoords> {
	let mut rings = Vec::new();
	let mut open: Vec<RingCoords> = Vec::new();
	for chain in chains.into_iter().filter(|chain| chain.len() >= 2) {
		if is_closed_ring(&chain) {
			rings.push(chain);
		} else {
			open.push(chain);
		}
	}

	open.reverse();
	while let Some(mut current) = open.pop() {
		loop {
			if is_closed_ring(&current) {
				rings.push(current);
				break;
			}
			let Some(end) = current.last().copied() else {
				break;
			};
			let next = open
				.iter()
				.rposition(|chain| chain.first() == Some(&end) || chain.last() == Some(&end));
			let Some(index) = next else {
				log::debug!("discarding open chain of {} points ending at {end:?}", current.len());
				break;
			};
			let mut next = open.remove(index);
			if next.first() != Some(&end) {
				next.reverse();
			}
			current.extend(next.into_iter().skip(1));
		}
	}
	rings
}

/// Builds the area of a relation from `(role, chain)` members.
pub fn assemble_multipolygon(members: Vec<(Role, RingCoords)>) -> MultiPolygon<f64> {
	let (outer, inner): (Vec<_>, Vec<_>) = members.into_iter().partition(|(role, _)| *role == Role::Outer);
	let outer = rings_to_polygons(stitch_rings(outer.into_iter().map(|(_, chain)| chain).collect()));
	let inner = rings_to_polygons(stitch_rings(inner.into_iter().map(|(_, chain)| chain).collect()));

	let outer_area = unary_union(&outer);
	let holes: Vec<Polygon<f64>> = inner
		.into_iter()
		.filter(|hole| outer.iter().any(|polygon| polygon.contains(hole)))
		.collect();
	if holes.is_empty() {
		return outer_area;
	}
	let area = outer_area.difference(&unary_union(&holes));
	log::trace!("relation assembled from {} outer and {} inner rings", outer.len(), holes.len());
	MultiPolygon::new(area.into_iter().filter(|polygon| polygon.unsigned_area() > 0.0).collect())
}

fn rings_to_polygons(rings: Vec<RingCoords>) -> Vec<Polygon<f64>> {
	rings
		.iter()
		.filter_map(|ring| repair(&polygon_from_rings(ring, &[])))
		.flatten()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn square(x0: f64, y0: f64, size: f64) -> RingCoords {
		vec![
			[x0, y0],
			[x0 + size, y0],
			[x0 + size, y0 + size],
			[x0, y0 + size],
			[x0, y0],
		]
	}

	#[test]
	fn roles() {
		assert_eq!(Role::parse("inner"), Role::Inner);
		assert_eq!(Role::parse("outer"), Role::Outer);
		assert_eq!(Role::parse(""), Role::Outer);
	}

	#[test]
	fn stitches_chains_in_any_direction() {
		let chains = vec![
			vec![[0.0, 0.0], [4.0, 0.0]],
			vec![[4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
			// reversed relative to its neighbours
			vec![[4.0, 4.0], [4.0, 0.0]],
		];
		let rings = stitch_rings(chains);
		assert_eq!(rings.len(), 1);
		assert_eq!(rings[0].first(), rings[0].last());
		assert_eq!(rings[0].len(), 5);
		assert_relative_eq!(crate::ring::signed_area(&rings[0]).abs(), 16.0);
	}

	#[test]
	fn unclosable_chains_are_dropped() {
		let rings = stitch_rings(vec![vec![[0.0, 0.0], [1.0, 0.0]], square(5.0, 5.0, 1.0)]);
		assert_eq!(rings, vec![square(5.0, 5.0, 1.0)]);
	}

	#[test]
	fn inner_rings_become_holes() {
		let area = assemble_multipolygon(vec![
			(Role::Outer, square(0.0, 0.0, 10.0)),
			(Role::Inner, square(2.0, 2.0, 3.0)),
			(Role::Outer, square(20.0, 0.0, 2.0)),
			// not inside any outer ring
			(Role::Inner, square(40.0, 40.0, 1.0)),
		]);
		assert_eq!(area.0.len(), 2);
		assert_relative_eq!(area.unsigned_area(), 100.0 - 9.0 + 4.0, epsilon = 1e-9);
	}
}
