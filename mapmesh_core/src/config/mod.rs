//! Pipeline configuration.
//!
//! Every tunable constant of the pipeline lives in one immutable [`PipelineConfig`],
//! loaded from YAML or built with `Default`, and handed to the geometry stages at
//! construction time.
//!
//! ```yaml
//! roads:
//!   lane_width: 3.5
//!   widths:
//!     primary: 14
//! buildings:
//!   default_height: 12
//! ```

mod buildings;
mod geometry;
mod merge;
mod pipeline;
mod roads;
mod sampling;
mod sidewalks;

pub use buildings::BuildingsConfig;
pub use geometry::GeometryConfig;
pub use merge::MergeConfig;
pub use pipeline::PipelineConfig;
pub use roads::RoadsConfig;
pub use sampling::SamplingConfig;
pub use sidewalks::SidewalksConfig;
