use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RoadsConfig {
	/// Width of a single lane in metres.
	pub lane_width: f64,

	/// Width used when no tag yields one.
	pub default_width: f64,

	/// Lower bound for explicit and lane-derived widths.
	pub min_width: f64,

	/// Upper bound for explicit and lane-derived widths.
	pub max_width: f64,

	/// Whether explicit and lane-derived widths are clamped to `[min_width, max_width]`.
	pub clamp: bool,

	/// Mitre ratio limit of the corridor buffer joins.
	pub mitre_limit: f64,

	/// Width per `highway` class. Only classes listed here are built as roads.
	pub widths: BTreeMap<String, f64>,

	/// Height of the road slab above ground.
	pub elevation: f64,
}

impl Default for RoadsConfig {
	fn default() -> Self {
		let widths = [
			("motorway", 18.0),
			("trunk", 15.0),
			("primary", 12.0),
			("secondary", 10.0),
			("tertiary", 8.0),
			("unclassified", 7.0),
			("residential", 6.0),
			("service", 5.0),
		]
		.into_iter()
		.map(|(class, width)| (class.to_string(), width))
		.collect();

		RoadsConfig {
			lane_width: 3.2,
			default_width: 6.5,
			min_width: 4.0,
			max_width: 18.0,
			clamp: true,
			mitre_limit: 5.0,
			widths,
			elevation: 0.05,
		}
	}
}
