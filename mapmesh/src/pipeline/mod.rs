//! The end-to-end pipeline and its individual stages.

mod extract;
mod files;

pub use extract::Extractor;
pub use files::{read_corridors, write_corridors};

use crate::scene::{world_sdf, write_model};
use anyhow::{Result, ensure};
use itertools::Itertools;
use mapmesh_core::{Category, MapData, PipelineConfig};
use mapmesh_derive::context;
use mapmesh_geometry::{
	Corridor, Extrusion, Mesh, MeshAssembler, MergeKey, OverlapResolver, PolygonMerger, Triangulator,
	goals::route_goals, overlap::resolve_by_rank, sampling::sample_grid,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{collections::BTreeMap, fmt, fs, path::Path};

/// Runs pipeline stages with one immutable configuration.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
	config: PipelineConfig,
}

impl Pipeline {
	#[must_use]
	pub fn new(config: PipelineConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &PipelineConfig {
		&self.config
	}

	pub fn merge_key(&self) -> MergeKey {
		if self.config.merge.by_name {
			MergeKey::ByName
		} else {
			MergeKey::ById
		}
	}

	/// Extracts and merges every entity of `category`.
	pub fn layer(&self, map: &MapData, category: Category) -> Vec<Corridor> {
		let fragments = Extractor::new(map, &self.config).corridors(category);
		self.merge(fragments, self.merge_key())
	}

	pub fn merge(&self, corridors: Vec<Corridor>, key: MergeKey) -> Vec<Corridor> {
		PolygonMerger::new(&self.config.geometry).merge(corridors, key)
	}

	/// Clips `base` against all polygons of `obstacles`.
	pub fn clip(&self, base: Vec<Corridor>, obstacles: &[Corridor]) -> Vec<Corridor> {
		OverlapResolver::new(obstacles, &self.config.geometry).clip_all(base)
	}

	pub fn resolve(&self, layers: BTreeMap<Category, Vec<Corridor>>) -> BTreeMap<Category, Vec<Corridor>> {
		resolve_by_rank(layers, &self.config.geometry)
	}

	/// Triangulates and extrudes corridors.
	///
	/// Every corridor gets the profile of `kind` if given, else the profile of its own category.
	pub fn mesh(&self, corridors: &[Corridor], kind: Option<Category>) -> Mesh {
		let mut assembler = MeshAssembler::new(Triangulator::new(&self.config.geometry));
		for corridor in corridors {
			let category = kind.unwrap_or(corridor.category);
			let extrusion = Extrusion::for_category(category, corridor.height, &self.config);
			assembler.add_corridor(corridor, extrusion);
		}
		assembler.finish()
	}

	/// Grid points covering the corridors, at `resolution` or the configured one.
	pub fn sample(&self, corridors: &[Corridor], resolution: Option<f64>) -> Result<Vec<[f64; 2]>> {
		let resolution = resolution.unwrap_or(self.config.sampling.resolution);
		sample_grid(corridors.iter().flat_map(|corridor| &corridor.polygons), resolution)
	}

	/// Random route goals on the corridors, nearest to the spawn point first.
	///
	/// `count` and `seed` fall back to the configured values; without any seed the goals differ per run.
	pub fn goals(&self, corridors: &[Corridor], count: Option<usize>, seed: Option<u64>) -> Result<Vec<[f64; 2]>> {
		let count = count.unwrap_or(self.config.sampling.goal_count);
		let mut rng = match seed.or(self.config.sampling.goal_seed) {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		let polygons: Vec<_> = corridors.iter().flat_map(|corridor| &corridor.polygons).cloned().collect();
		route_goals(&polygons, count, &mut rng)
	}

	/// Runs every stage from a map snapshot to model directories.
	///
	/// Writes `<category>s.json` intermediate files, one model directory per non-empty
	/// category and a `world.sdf` including all models.
	#[context("Failed to build scene from {}", map_path.display())]
	pub fn build(&self, map_path: &Path, out_dir: &Path) -> Result<BuildReport> {
		let map = MapData::from_path(map_path)?;
		log::info!(
			"loaded {} nodes, {} ways, {} relations",
			map.nodes_enu.len(),
			map.ways.len(),
			map.relations.len()
		);

		let layers: BTreeMap<Category, Vec<Corridor>> = Category::ALL
			.into_iter()
			.map(|category| (category, self.layer(&map, category)))
			.collect();
		ensure!(
			layers.values().any(|corridors| !corridors.is_empty()),
			"no usable road, building or sidewalk in {}",
			map_path.display()
		);

		let layers = self.resolve(layers);
		fs::create_dir_all(out_dir)?;

		let mut report = BuildReport::default();
		let mut models = Vec::new();
		for (category, corridors) in &layers {
			write_corridors(&out_dir.join(format!("{}s.json", category.name())), corridors)?;
			let mesh = self.mesh(corridors, Some(*category));
			report.layers.push(LayerReport {
				category: *category,
				entities: corridors.len(),
				faces: mesh.face_count(),
			});
			if mesh.is_empty() {
				log::info!("no {category} geometry, skipping its model");
				continue;
			}
			write_model(out_dir, category.model_name(), *category, &mesh)?;
			models.push(category.model_name().to_string());
		}
		fs::write(out_dir.join("world.sdf"), world_sdf("mapmesh_world", &models))?;

		log::info!("{report}");
		Ok(report)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerReport {
	pub category: Category,
	pub entities: usize,
	pub faces: usize,
}

/// Entity and face counts per category of a build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
	pub layers: Vec<LayerReport>,
}

impl BuildReport {
	pub fn get(&self, category: Category) -> Option<&LayerReport> {
		self.layers.iter().find(|layer| layer.category == category)
	}
}

impl fmt::Display for BuildReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = self
			.layers
			.iter()
			.map(|layer| format!("{}: {} entities, {} faces", layer.category, layer.entities, layer.faces))
			.join("; ");
		f.write_str(&text)
	}
}
