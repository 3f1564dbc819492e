use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingsConfig {
	/// Height used when neither `height` nor `building:levels` is usable.
	pub default_height: f64,

	/// Height of one storey, multiplied with `building:levels`.
	pub level_height: f64,

	/// Emit every wall quad a second time with reversed winding.
	pub double_sided_walls: bool,
}

impl Default for BuildingsConfig {
	fn default() -> Self {
		BuildingsConfig {
			default_height: 10.0,
			level_height: 3.5,
			double_sided_walls: true,
		}
	}
}
