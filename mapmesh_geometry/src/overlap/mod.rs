//! Clips lower priority categories against higher priority ones.
//!
//! Obstacles are indexed once per pass. Each base polygon is differenced against the union
//! of only those obstacles it touches, so the cost stays local to its neighbourhood.

mod spatial_index;

use crate::{Corridor, merge::drop_slivers};
use geo::{BooleanOps, MultiPolygon, Polygon, unary_union};
use mapmesh_core::{Category, GeometryConfig};
use std::collections::BTreeMap;

pub use spatial_index::ObstacleIndex;

#[derive(Debug)]
pub struct OverlapResolver {
	index: ObstacleIndex,
	min_area: f64,
}

impl OverlapResolver {
	/// Indexes every polygon of `obstacles`.
	pub fn new<'a, I>(obstacles: I, config: &GeometryConfig) -> Self
	where
		I: IntoIterator<Item = &'a Corridor>,
	{
		let polygons = obstacles
			.into_iter()
			.flat_map(|corridor| corridor.polygons.iter().cloned());
		Self::from_polygons(polygons, config)
	}

	pub fn from_polygons<I: IntoIterator<Item = Polygon<f64>>>(polygons: I, config: &GeometryConfig) -> Self {
		let index = ObstacleIndex::new(polygons);
		log::debug!("indexed {} obstacle polygons", index.len());
		Self {
			index,
			min_area: config.min_area,
		}
	}

	/// `polygon` minus every obstacle. All remaining parts are kept, parts not larger than
	/// the minimum area are discarded.
	pub fn clip_polygon(&self, polygon: &Polygon<f64>) -> MultiPolygon<f64> {
		let candidates = self.index.candidates(polygon);
		if candidates.is_empty() {
			return MultiPolygon::new(vec![polygon.clone()]);
		}
		let obstacle = unary_union(candidates);
		drop_slivers(polygon.difference(&obstacle), self.min_area)
	}

	pub fn clip(&self, polygons: &MultiPolygon<f64>) -> MultiPolygon<f64> {
		polygons.iter().flat_map(|polygon| self.clip_polygon(polygon)).collect()
	}

	/// Clips every corridor. Corridors consumed entirely are dropped.
	pub fn clip_all(&self, base: Vec<Corridor>) -> Vec<Corridor> {
		let input_count = base.len();
		let clipped: Vec<Corridor> = base
			.into_iter()
			.filter_map(|mut corridor| {
				corridor.polygons = self.clip(&corridor.polygons);
				if corridor.is_empty() {
					log::debug!("'{}' is covered entirely by obstacles", corridor.key);
					return None;
				}
				Some(corridor)
			})
			.collect();
		log::debug!("{} of {input_count} corridors remain after clipping", clipped.len());
		clipped
	}
}

/// Resolves overlaps between categories in rank order.
///
/// Roads are kept as they are. Every other category is clipped against the union of all
/// categories ranked above it, using their already clipped geometry.
pub fn resolve_by_rank(
	layers: BTreeMap<Category, Vec<Corridor>>,
	config: &GeometryConfig,
) -> BTreeMap<Category, Vec<Corridor>> {
	let mut resolved: BTreeMap<Category, Vec<Corridor>> = BTreeMap::new();
	for (category, corridors) in layers {
		let clipped = if resolved.is_empty() {
			corridors
		} else {
			let resolver = OverlapResolver::new(resolved.values().flatten(), config);
			resolver.clip_all(corridors)
		};
		log::info!("{category}: {} entities after overlap resolution", clipped.len());
		resolved.insert(category, clipped);
	}
	resolved
}
