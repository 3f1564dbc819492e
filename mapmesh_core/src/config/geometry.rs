use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
	/// Vertices closer than this are merged by the constrained triangulation.
	pub snap_radius: f64,

	/// Polygon parts with a smaller area are discarded after set operations.
	pub min_area: f64,
}

impl Default for GeometryConfig {
	fn default() -> Self {
		GeometryConfig {
			snap_radius: 1e-6,
			min_area: 1e-9,
		}
	}
}
