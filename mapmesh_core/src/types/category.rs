use super::Tags;
use crate::config::RoadsConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The kind of entity a corridor represents.
///
/// Variants are declared in clip priority order: a category is never allowed to overlap
/// any category that precedes it. Roads are never clipped, buildings lose every area
/// covered by roads, sidewalks lose every area covered by roads or buildings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Category {
	Road,
	Building,
	Sidewalk,
}

impl Category {
	/// All categories, highest priority first.
	pub const ALL: [Category; 3] = [Category::Road, Category::Building, Category::Sidewalk];

	/// Clip rank, `0` is the highest priority.
	pub fn rank(self) -> u8 {
		match self {
			Category::Road => 0,
			Category::Building => 1,
			Category::Sidewalk => 2,
		}
	}

	/// Classifies a way by its tags.
	///
	/// Roads are recognised by a `highway` value present in the road width table, so
	/// only classes with a known physical width become corridors. Footways and pedestrian
	/// areas become sidewalks, anything carrying `building` becomes a building.
	pub fn classify(tags: &Tags, roads: &RoadsConfig) -> Option<Category> {
		let highway = tags.get("highway");
		if let Some(highway) = highway
			&& roads.widths.contains_key(highway)
		{
			return Some(Category::Road);
		}
		if tags.get("footway") == Some("sidewalk") || matches!(highway, Some("footway" | "pedestrian")) {
			return Some(Category::Sidewalk);
		}
		if tags.contains_key("building") {
			return Some(Category::Building);
		}
		None
	}

	pub fn name(self) -> &'static str {
		match self {
			Category::Road => "road",
			Category::Building => "building",
			Category::Sidewalk => "sidewalk",
		}
	}

	/// Name of the scene model generated for this category.
	pub fn model_name(self) -> &'static str {
		match self {
			Category::Road => "roads_mesh",
			Category::Building => "buildings_mesh",
			Category::Sidewalk => "sidewalks_mesh",
		}
	}
}

impl Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.pad(self.name())
	}
}
