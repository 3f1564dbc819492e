use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SidewalksConfig {
	/// Strip width for sidewalks without a usable `width` tag.
	pub default_width: f64,

	/// Elevation of the walking surface.
	pub top: f64,

	/// Elevation of the sidewalk base.
	pub bottom: f64,
}

impl Default for SidewalksConfig {
	fn default() -> Self {
		SidewalksConfig {
			default_width: 2.0,
			top: 0.15,
			bottom: 0.05,
		}
	}
}
