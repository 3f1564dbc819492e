use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SamplingConfig {
	/// Grid spacing in metres.
	pub resolution: f64,

	/// Number of random route goals to pick.
	pub goal_count: usize,

	/// Seed of the goal generator. Unset draws a fresh seed from the OS on every run.
	pub goal_seed: Option<u64>,
}

impl Default for SamplingConfig {
	fn default() -> Self {
		SamplingConfig {
			resolution: 0.5,
			goal_count: 15,
			goal_seed: None,
		}
	}
}
