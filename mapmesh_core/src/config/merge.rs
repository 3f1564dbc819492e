use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
	/// Group fragments sharing a `name` tag. When disabled every source entity stays on its own.
	pub by_name: bool,
}

impl Default for MergeConfig {
	fn default() -> Self {
		MergeConfig { by_name: true }
	}
}
