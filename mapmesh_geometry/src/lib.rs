//! The geometry core of the pipeline.
//!
//! Stages, leaf first:
//! - [`WidthModel`] / [`HeightModel`]: physical dimensions from attribute tags
//! - [`CorridorBuilder`]: centerline to paved corridor polygon
//! - [`PolygonMerger`]: union of fragments belonging to one entity
//! - [`OverlapResolver`]: clipping against higher priority categories
//! - [`Triangulator`]: polygons with holes to counter-clockwise triangles
//! - [`MeshAssembler`]: slabs and prisms to a renderer-ready [`Mesh`]
//!
//! Every stage takes its input [`Corridor`]s by value and hands new ones to the next stage.

pub mod assembly;
pub mod corridor;
mod entity;
pub mod goals;
mod height;
pub mod merge;
pub mod mesh;
pub mod overlap;
pub mod ring;
pub mod sampling;
pub mod triangulate;
mod width;

pub use corridor::{CorridorBuilder, CorridorError};
pub use entity::Corridor;
pub use height::HeightModel;
pub use merge::{MergeKey, PolygonMerger};
pub use mesh::{Extrusion, Mesh, MeshAssembler};
pub use overlap::{ObstacleIndex, OverlapResolver};
pub use triangulate::Triangulator;
pub use width::WidthModel;
