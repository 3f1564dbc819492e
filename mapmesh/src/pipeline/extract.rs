//! Builds raw, unmerged corridors from the ways and relations of a map snapshot.

use mapmesh_core::{Category, MapData, PipelineConfig, RingCoords, Way};
use mapmesh_geometry::{
	Corridor, CorridorBuilder, HeightModel, WidthModel,
	assembly::{Role, assemble_multipolygon},
	merge::repair,
	ring::{close_ring, has_area_support, polygon_from_rings},
};

pub struct Extractor<'a> {
	map: &'a MapData,
	config: &'a PipelineConfig,
}

impl<'a> Extractor<'a> {
	pub fn new(map: &'a MapData, config: &'a PipelineConfig) -> Self {
		Self { map, config }
	}

	pub fn corridors(&self, category: Category) -> Vec<Corridor> {
		let corridors = match category {
			Category::Road => self.line_corridors(category, &WidthModel::new(&self.config.roads)),
			Category::Sidewalk => self.line_corridors(category, &WidthModel::sidewalks(&self.config.sidewalks)),
			Category::Building => self.buildings(),
		};
		log::info!("extracted {} {category} fragments", corridors.len());
		corridors
	}

	fn ways_of(&self, category: Category) -> impl Iterator<Item = &'a Way> {
		let (map, config) = (self.map, self.config);
		map
			.ways
			.iter()
			.filter(move |way| Category::classify(&way.tags, &config.roads) == Some(category))
	}

	/// Resolved way geometry. Missing node references are skipped.
	fn points_of(&self, way: &Way) -> RingCoords {
		let resolved = self.map.resolve_nodes(&way.nodes);
		if !resolved.missing.is_empty() {
			log::warn!(
				"way {}: {} of {} node references are missing",
				way.id,
				resolved.missing.len(),
				way.nodes.len()
			);
		}
		resolved.points
	}

	fn line_corridors(&self, category: Category, widths: &WidthModel) -> Vec<Corridor> {
		let builder = CorridorBuilder::new(&self.config.roads);
		self
			.ways_of(category)
			.filter_map(|way| {
				let points = self.points_of(way);
				let width = widths.resolve(&way.tags);
				match builder.build(&points, width) {
					Ok(polygons) => Some(Corridor {
						key: way_key(way.id),
						category,
						tags: way.tags.clone(),
						width: Some(width),
						height: None,
						polygons,
						source_ids: vec![way.id],
					}),
					Err(err) => {
						log::warn!("skipping way {}: {err}", way.id);
						None
					}
				}
			})
			.collect()
	}

	fn buildings(&self) -> Vec<Corridor> {
		let heights = HeightModel::new(&self.config.buildings);
		let mut corridors: Vec<Corridor> = self
			.ways_of(Category::Building)
			.filter_map(|way| {
				let points = self.points_of(way);
				if !has_area_support(&points) {
					log::warn!("skipping building way {}: fewer than three distinct points", way.id);
					return None;
				}
				let Some(polygons) = repair(&polygon_from_rings(&close_ring(points), &[])) else {
					log::warn!("skipping building way {}: malformed footprint", way.id);
					return None;
				};
				Some(Corridor {
					key: way_key(way.id),
					category: Category::Building,
					tags: way.tags.clone(),
					width: None,
					height: Some(heights.resolve(&way.tags)),
					polygons,
					source_ids: vec![way.id],
				})
			})
			.collect();

		let ways = self.map.way_index();
		for relation in &self.map.relations {
			if Category::classify(&relation.tags, &self.config.roads) != Some(Category::Building) {
				continue;
			}
			let mut members = Vec::new();
			for member in relation.members.iter().filter(|member| member.member_type == "way") {
				match ways.get(&member.reference) {
					Some(way) => members.push((Role::parse(&member.role), self.points_of(way))),
					None => log::warn!("relation {}: member way {} is missing", relation.id, member.reference),
				}
			}
			let polygons = assemble_multipolygon(members);
			if polygons.0.is_empty() {
				log::warn!("skipping building relation {}: no closed outer ring", relation.id);
				continue;
			}
			corridors.push(Corridor {
				key: format!("relation/{}", relation.id),
				category: Category::Building,
				tags: relation.tags.clone(),
				width: None,
				height: Some(heights.resolve(&relation.tags)),
				polygons,
				source_ids: vec![relation.id],
			});
		}
		corridors
	}
}

fn way_key(id: i64) -> String {
	format!("way/{id}")
}
