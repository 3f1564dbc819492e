//! Converts planar map data into non-overlapping road, building and sidewalk meshes.
//!
//! [`Pipeline`] runs the stages of [`mapmesh_geometry`] on a [`MapData`] snapshot and
//! [`scene`] packages the resulting meshes as simulator models.

pub mod pipeline;
pub mod scene;

pub use mapmesh_core::{Category, MapData, PipelineConfig};
pub use pipeline::{BuildReport, Pipeline};
