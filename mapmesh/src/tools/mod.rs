pub mod build;
pub mod clip;
pub mod goals;
pub mod merge;
pub mod mesh;
pub mod roads;
pub mod sample;
