//! The intermediate polygon file exchanged between pipeline stages.
//!
//! A JSON object mapping an entity key to a [`PolygonRecord`]:
//!
//! ```json
//! {
//!   "Via Sparano": {
//!     "merged_polygons": [[[0.0, -3.0], [100.0, -3.0], [100.0, 3.0], [0.0, 3.0], [0.0, -3.0]]],
//!     "width": 6.0,
//!     "tags": { "highway": "residential", "name": "Via Sparano" },
//!     "source_ids": [12, 13]
//!   }
//! }
//! ```
//!
//! Records written by the pipeline also carry their `category`.
//! Older producers wrote a single ring as `polygon` or a ring list as `polygons`;
//! both are still accepted when reading.

use super::{Category, Tags};
use crate::io::{read_json, write_json};
use anyhow::Result;
use mapmesh_derive::context;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// A ring as a list of `[x, y]` pairs.
pub type RingCoords = Vec<[f64; 2]>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct PolygonRecord {
	/// Exterior ring of every polygon part.
	pub merged_polygons: Vec<RingCoords>,
	/// Interior rings per polygon part, aligned by index with `merged_polygons`.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub merged_holes: Vec<Vec<RingCoords>>,
	pub width: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<f64>,
	pub tags: Tags,
	pub source_ids: Vec<i64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<Category>,
}

impl PolygonRecord {
	/// Iterates over the polygon parts as `(exterior, holes)`.
	pub fn parts(&self) -> impl Iterator<Item = (&RingCoords, &[RingCoords])> {
		self.merged_polygons.iter().enumerate().map(|(index, exterior)| {
			let holes = self.merged_holes.get(index).map_or(&[][..], Vec::as_slice);
			(exterior, holes)
		})
	}
}

#[derive(Deserialize)]
struct RawRecord {
	#[serde(default)]
	merged_polygons: Option<Vec<RingCoords>>,
	#[serde(default)]
	polygons: Option<Vec<RingCoords>>,
	#[serde(default)]
	polygon: Option<RingCoords>,
	#[serde(default)]
	merged_holes: Vec<Vec<RingCoords>>,
	#[serde(default)]
	width: Option<f64>,
	#[serde(default)]
	height: Option<f64>,
	#[serde(default)]
	tags: Tags,
	#[serde(default, alias = "source_way_ids")]
	source_ids: Vec<i64>,
	#[serde(default)]
	category: Option<Category>,
}

impl From<RawRecord> for PolygonRecord {
	fn from(raw: RawRecord) -> Self {
		let merged_polygons = raw
			.merged_polygons
			.or(raw.polygons)
			.or_else(|| raw.polygon.map(|ring| vec![ring]))
			.unwrap_or_default();
		PolygonRecord {
			merged_polygons,
			merged_holes: raw.merged_holes,
			width: raw.width,
			height: raw.height,
			tags: raw.tags,
			source_ids: raw.source_ids,
			category: raw.category,
		}
	}
}

/// All records of one intermediate file, ordered by key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonFile(pub BTreeMap<String, PolygonRecord>);

impl PolygonFile {
	pub fn new() -> PolygonFile {
		PolygonFile(BTreeMap::new())
	}

	#[context("Failed to read polygon file {}", path.display())]
	pub fn from_path(path: &Path) -> Result<Self> {
		read_json(path)
	}

	#[context("Failed to write polygon file {}", path.display())]
	pub fn to_path(&self, path: &Path) -> Result<()> {
		write_json(path, self)
	}

	pub fn insert(&mut self, key: String, record: PolygonRecord) {
		self.0.insert(key, record);
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &PolygonRecord)> {
		self.0.iter()
	}
}

impl FromIterator<(String, PolygonRecord)> for PolygonFile {
	fn from_iter<T: IntoIterator<Item = (String, PolygonRecord)>>(iter: T) -> Self {
		PolygonFile(BTreeMap::from_iter(iter))
	}
}

impl IntoIterator for PolygonFile {
	type Item = (String, PolygonRecord);
	type IntoIter = std::collections::btree_map::IntoIter<String, PolygonRecord>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
