//! The input snapshot handed over by the parsing and projection collaborators.
//!
//! ```json
//! {
//!   "nodes_enu": { "1": [0.0, 0.0], "2": [100.0, 0.0] },
//!   "ways": [{ "id": 10, "nodes": [1, 2], "tags": { "highway": "primary" } }],
//!   "relations": [{ "id": 20, "members": [{ "type": "way", "ref": 10, "role": "outer" }], "tags": {} }]
//! }
//! ```
//!
//! Node coordinates are already in a local planar frame (metres east/north of an origin).

use super::Tags;
use crate::io::read_json;
use anyhow::{Result, ensure};
use mapmesh_derive::context;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
	#[serde(default)]
	pub nodes_enu: HashMap<i64, [f64; 2]>,
	#[serde(default)]
	pub ways: Vec<Way>,
	#[serde(default)]
	pub relations: Vec<Relation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Way {
	pub id: i64,
	pub nodes: Vec<i64>,
	#[serde(default)]
	pub tags: Tags,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
	pub id: i64,
	#[serde(default)]
	pub members: Vec<Member>,
	#[serde(default)]
	pub tags: Tags,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
	#[serde(rename = "type", default = "default_member_type")]
	pub member_type: String,
	#[serde(rename = "ref")]
	pub reference: i64,
	#[serde(default)]
	pub role: String,
}

fn default_member_type() -> String {
	"way".to_string()
}

/// Points of a node list that could be found in the snapshot, plus the ids that could not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedPoints {
	pub points: Vec<[f64; 2]>,
	pub missing: Vec<i64>,
}

impl MapData {
	/// Loads a snapshot. A missing file or a snapshot without a single way is fatal.
	#[context("Failed to load map snapshot {}", path.display())]
	pub fn from_path(path: &Path) -> Result<Self> {
		let map: MapData = read_json(path)?;
		ensure!(!map.ways.is_empty(), "map snapshot contains no ways");
		Ok(map)
	}

	/// Resolves node references to coordinates, keeping every valid reference in order.
	pub fn resolve_nodes(&self, node_ids: &[i64]) -> ResolvedPoints {
		let mut resolved = ResolvedPoints::default();
		for id in node_ids {
			match self.nodes_enu.get(id) {
				Some(point) => resolved.points.push(*point),
				None => resolved.missing.push(*id),
			}
		}
		resolved
	}

	/// Lookup table from way id to way.
	pub fn way_index(&self) -> HashMap<i64, &Way> {
		self.ways.iter().map(|way| (way.id, way)).collect()
	}
}
