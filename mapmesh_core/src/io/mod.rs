//! File helpers shared by the readers and writers of the pipeline.

mod json;

pub use json::{read_json, write_json};
