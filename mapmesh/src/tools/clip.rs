use anyhow::Result;
use clap::Args;
use mapmesh::{
	Pipeline,
	pipeline::{read_corridors, write_corridors},
};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// polygon file to clip
	#[arg(required = true)]
	base_file: PathBuf,

	/// polygon files whose area is removed from the base file
	#[arg(required = true, num_args = 1..)]
	obstacle_files: Vec<PathBuf>,

	/// clipped polygon file to write
	#[arg(long, short, required = true)]
	output: PathBuf,
}

pub fn run(arguments: &Subcommand, pipeline: &Pipeline) -> Result<()> {
	let roads = &pipeline.config().roads;
	let base = read_corridors(&arguments.base_file, None, roads)?;
	let mut obstacles = Vec::new();
	for path in &arguments.obstacle_files {
		obstacles.extend(read_corridors(path, None, roads)?);
	}
	let input_count = base.len();
	let clipped = pipeline.clip(base, &obstacles);
	write_corridors(&arguments.output, &clipped)?;
	log::info!(
		"{} of {input_count} entities remain after clipping against {} obstacles",
		clipped.len(),
		obstacles.len()
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::{run_command, testdata};
	use approx::assert_relative_eq;
	use mapmesh::pipeline::read_corridors;
	use mapmesh_core::{Category, PolygonFile, RoadsConfig};

	#[test]
	fn clips_buildings_against_roads() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("clipped.json");
		run_command(vec![
			"mapmesh",
			"clip",
			&testdata("buildings.json"),
			&testdata("legacy_polygons.json"),
			"--output",
			output.to_str().unwrap(),
		])
		.unwrap();
		let file = PolygonFile::from_path(&output).unwrap();
		assert!(!file.0.contains_key("way/900"), "covered building must be dropped");
		let clipped = read_corridors(&output, Some(Category::Building), &RoadsConfig::default()).unwrap();
		assert_eq!(clipped.len(), 1);
		assert_relative_eq!(clipped[0].area(), 50.0, epsilon = 1e-6);
	}
}
