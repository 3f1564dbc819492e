use mapmesh_core::{Category, PipelineConfig};

/// Vertical shape given to a footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extrusion {
	/// Flat surface at one elevation, facing up.
	Slab { elevation: f64 },
	/// Walls between two elevations closed by an upward-facing top cap.
	Prism { bottom: f64, top: f64, double_sided: bool },
}

impl Extrusion {
	/// The profile used for `category`. Buildings without a height use the configured default.
	pub fn for_category(category: Category, height: Option<f64>, config: &PipelineConfig) -> Extrusion {
		match category {
			Category::Road => Extrusion::Slab {
				elevation: config.roads.elevation,
			},
			Category::Building => Extrusion::Prism {
				bottom: 0.0,
				top: height.unwrap_or(config.buildings.default_height),
				double_sided: config.buildings.double_sided_walls,
			},
			Category::Sidewalk => Extrusion::Prism {
				bottom: config.sidewalks.bottom,
				top: config.sidewalks.top,
				double_sided: false,
			},
		}
	}
}
