//! Groups polygon fragments by entity and unions each group.

use crate::{
	Corridor,
	ring::{line_string_to_ring, polygon_from_rings},
};
use geo::{Area, LineString, MultiPolygon, Polygon, Validation, unary_union};
use i_overlay::{core::fill_rule::FillRule, float::simplify::SimplifyShape};
use mapmesh_core::{GeometryConfig, RingCoords};
use std::collections::HashMap;

/// Repairs a polygon into a valid, non-empty geometry.
///
/// Valid polygons are kept as they are. Invalid ones (self-intersections, spikes, wrong ring
/// order) are rebuilt from all their rings under the even-odd rule, so every lobe of a
/// crossing ring survives as its own part. Returns `None` if nothing with area remains.
pub fn repair(polygon: &Polygon<f64>) -> Option<MultiPolygon<f64>> {
	let repaired = if polygon.is_valid() {
		MultiPolygon::new(vec![polygon.clone()])
	} else {
		simplify_even_odd(polygon)
	};
	(repaired.unsigned_area() > 0.0).then_some(repaired)
}

fn simplify_even_odd(polygon: &Polygon<f64>) -> MultiPolygon<f64> {
	let contours: Vec<RingCoords> = std::iter::once(polygon.exterior())
		.chain(polygon.interiors())
		.map(open_ring)
		.filter(|ring| ring.len() >= 3)
		.collect();
	contours
		.simplify_shape(FillRule::EvenOdd)
		.into_iter()
		.filter_map(|mut shape| {
			if shape.is_empty() {
				return None;
			}
			let exterior = shape.remove(0);
			Some(polygon_from_rings(&exterior, &shape))
		})
		.collect()
}

/// Ring points without the repeated closing point.
fn open_ring(ring: &LineString<f64>) -> RingCoords {
	let mut points = line_string_to_ring(ring);
	if points.len() > 1 && points.first() == points.last() {
		points.pop();
	}
	points
}

/// How fragments are grouped into entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeKey {
	/// Fragments sharing a non-empty `name` tag form one entity.
	ByName,
	/// Every fragment keeps its own key.
	ById,
}

impl MergeKey {
	pub fn key_of(self, corridor: &Corridor) -> String {
		match self {
			MergeKey::ByName => match corridor.tags.get("name").map(str::trim) {
				Some(name) if !name.is_empty() => name.to_string(),
				_ => corridor.key.clone(),
			},
			MergeKey::ById => corridor.key.clone(),
		}
	}
}

/// Drops parts of `polygons` whose area does not exceed `min_area`.
pub fn drop_slivers(polygons: MultiPolygon<f64>, min_area: f64) -> MultiPolygon<f64> {
	polygons
		.into_iter()
		.filter(|polygon| polygon.unsigned_area() > min_area)
		.collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolygonMerger {
	min_area: f64,
}

impl PolygonMerger {
	#[must_use]
	pub fn new(config: &GeometryConfig) -> Self {
		Self {
			min_area: config.min_area,
		}
	}

	/// Groups `(key, polygon)` pairs by key and unions every group.
	///
	/// Groups come out in order of their first fragment. Fragments that cannot be repaired
	/// are dropped with a warning, groups left without area are dropped entirely.
	pub fn union_groups<K, I>(&self, fragments: I) -> Vec<(K, MultiPolygon<f64>)>
	where
		K: Clone + Eq + std::hash::Hash + std::fmt::Display,
		I: IntoIterator<Item = (K, Polygon<f64>)>,
	{
		let mut order: Vec<K> = Vec::new();
		let mut groups: HashMap<K, Vec<Polygon<f64>>> = HashMap::new();
		for (key, polygon) in fragments {
			match repair(&polygon) {
				Some(repaired) => groups
					.entry(key.clone())
					.or_insert_with(|| {
						order.push(key);
						Vec::new()
					})
					.extend(repaired),
				None => log::warn!("dropping fragment of '{key}': no valid area after repair"),
			}
		}

		order
			.into_iter()
			.filter_map(|key| {
				let parts = groups.remove(&key)?;
				let union = drop_slivers(unary_union(&parts), self.min_area);
				(!union.0.is_empty()).then_some((key, union))
			})
			.collect()
	}

	/// Merges corridors grouped by `key`.
	///
	/// The merged corridor takes the key of its group, the tags and category of the first
	/// fragment, the first known width and height, and the concatenated source ids.
	pub fn merge(&self, corridors: Vec<Corridor>, key: MergeKey) -> Vec<Corridor> {
		self.merge_by(corridors, |corridor| key.key_of(corridor))
	}

	/// Like [`PolygonMerger::merge`] with a caller-supplied grouping strategy.
	pub fn merge_by<F>(&self, corridors: Vec<Corridor>, group_key: F) -> Vec<Corridor>
	where
		F: Fn(&Corridor) -> String,
	{
		let input_count = corridors.len();
		let mut order: Vec<String> = Vec::new();
		let mut groups: HashMap<String, Vec<Corridor>> = HashMap::new();
		for corridor in corridors {
			let key = group_key(&corridor);
			groups
				.entry(key.clone())
				.or_insert_with(|| {
					order.push(key);
					Vec::new()
				})
				.push(corridor);
		}

		let merged: Vec<Corridor> = order
			.into_iter()
			.filter_map(|key| {
				let members = groups.remove(&key)?;
				self.merge_group(key, members)
			})
			.collect();
		log::debug!("merged {input_count} fragments into {} entities", merged.len());
		merged
	}

	fn merge_group(&self, key: String, members: Vec<Corridor>) -> Option<Corridor> {
		let first = members.first()?;
		let mut merged = Corridor {
			key: key.clone(),
			category: first.category,
			tags: first.tags.clone(),
			width: members.iter().find_map(|member| member.width),
			height: members.iter().find_map(|member| member.height),
			polygons: MultiPolygon::new(vec![]),
			source_ids: members.iter().flat_map(|member| member.source_ids.iter().copied()).collect(),
		};
		let fragments = members.into_iter().flat_map(|member| member.polygons).map(|polygon| (key.clone(), polygon));
		match self.union_groups(fragments).pop() {
			Some((_, polygons)) => {
				merged.polygons = polygons;
				Some(merged)
			}
			None => {
				log::warn!("dropping '{key}': merged geometry is empty");
				None
			}
		}
	}
}
