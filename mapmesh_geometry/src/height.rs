use mapmesh_core::{BuildingsConfig, Tags};

/// Resolves the extrusion height of a building from its tags.
///
/// `height` wins over `building:levels * level_height`, which wins over the default.
/// Unparseable or non-positive values fall through to the next rule.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightModel {
	level_height: f64,
	default_height: f64,
}

impl HeightModel {
	#[must_use]
	pub fn new(config: &BuildingsConfig) -> Self {
		Self {
			level_height: config.level_height,
			default_height: config.default_height,
		}
	}

	pub fn resolve(&self, tags: &Tags) -> f64 {
		if let Some(height) = tags.parse_f64("height").filter(|h| *h > 0.0) {
			return height;
		}
		if let Some(levels) = tags.parse_f64("building:levels").filter(|l| *l > 0.0) {
			return levels * self.level_height;
		}
		self.default_height
	}
}
