use super::{BuildingsConfig, GeometryConfig, MergeConfig, RoadsConfig, SamplingConfig, SidewalksConfig};
use anyhow::Result;
use mapmesh_derive::context;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
	/// Road widths and the road slab elevation
	#[serde(default)]
	pub roads: RoadsConfig,

	/// Building heights and wall rendering
	#[serde(default)]
	pub buildings: BuildingsConfig,

	/// Sidewalk strip width and extrusion
	#[serde(default)]
	pub sidewalks: SidewalksConfig,

	/// Fragment grouping
	#[serde(default)]
	pub merge: MergeConfig,

	/// Coverage point sampling
	#[serde(default)]
	pub sampling: SamplingConfig,

	/// Numeric tolerances of the geometry stages
	#[serde(default)]
	pub geometry: GeometryConfig,
}

impl PipelineConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	#[context("Failed to read config {}", path.display())]
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path)?;
		PipelineConfig::from_reader(BufReader::new(file))
	}

	/// Loads the config at `path`, or the defaults if no path was given.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => PipelineConfig::from_path(path),
			None => Ok(PipelineConfig::default()),
		}
	}
}
