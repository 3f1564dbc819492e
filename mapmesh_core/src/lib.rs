//! Contains the data model shared by all pipeline stages: attribute tags, entity categories,
//! the input map snapshot, the intermediate polygon file format and the pipeline configuration.

pub mod config;
pub mod io;
pub mod types;

pub use config::*;
pub use types::*;
