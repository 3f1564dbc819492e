use mapmesh_core::{RoadsConfig, SidewalksConfig, Tags};
use std::collections::BTreeMap;

/// Resolves the physical width of a corridor from its tags.
///
/// The first usable rule wins:
/// 1. `width`, parsed as a float
/// 2. `lanes`, as `max(1, lanes) * lane_width`
/// 3. the `highway` class looked up in the width table
/// 4. the default width
///
/// Values that do not parse fall through to the next rule. Results of the first two rules
/// are clamped when a clamp range is configured, table and default values are returned as is.
#[derive(Clone, Debug, PartialEq)]
pub struct WidthModel {
	lane_width: Option<f64>,
	table: BTreeMap<String, f64>,
	default_width: f64,
	clamp: Option<(f64, f64)>,
}

impl WidthModel {
	#[must_use]
	pub fn new(config: &RoadsConfig) -> Self {
		Self {
			lane_width: Some(config.lane_width),
			table: config.widths.clone(),
			default_width: config.default_width,
			clamp: config.clamp.then_some((config.min_width, config.max_width)),
		}
	}

	/// Width model of sidewalk strips: an explicit `width` or the sidewalk default.
	#[must_use]
	pub fn sidewalks(config: &SidewalksConfig) -> Self {
		Self {
			lane_width: None,
			table: BTreeMap::new(),
			default_width: config.default_width,
			clamp: None,
		}
	}

	pub fn resolve(&self, tags: &Tags) -> f64 {
		if let Some(width) = tags.parse_f64("width") {
			return self.clamp(width);
		}
		if let Some(lane_width) = self.lane_width
			&& let Some(lanes) = tags.parse_i64("lanes")
		{
			return self.clamp(lanes.max(1) as f64 * lane_width);
		}
		if let Some(width) = tags.get("highway").and_then(|class| self.table.get(class)) {
			return *width;
		}
		self.default_width
	}

	fn clamp(&self, width: f64) -> f64 {
		match self.clamp {
			Some((min, max)) => width.clamp(min, max),
			None => width,
		}
	}
}
