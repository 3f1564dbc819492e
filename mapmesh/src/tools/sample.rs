use anyhow::Result;
use clap::Args;
use mapmesh::{Pipeline, pipeline::read_corridors};
use mapmesh_core::io::write_json;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// intermediate polygon file
	#[arg(required = true)]
	input_file: PathBuf,

	/// JSON file receiving the list of [x, y] points
	#[arg(required = true)]
	output_file: PathBuf,

	/// grid spacing in metres; defaults to the configured resolution
	#[arg(long, short)]
	resolution: Option<f64>,
}

pub fn run(arguments: &Subcommand, pipeline: &Pipeline) -> Result<()> {
	let corridors = read_corridors(&arguments.input_file, None, &pipeline.config().roads)?;
	let points = pipeline.sample(&corridors, arguments.resolution)?;
	write_json(&arguments.output_file, &points)?;
	log::info!("wrote {} points to {}", points.len(), arguments.output_file.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::{run_command, testdata};
	use mapmesh_core::io::read_json;

	#[test]
	fn samples_legacy_roads() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("points.json");
		run_command(vec![
			"mapmesh",
			"sample",
			"--resolution",
			"5",
			&testdata("legacy_polygons.json"),
			output.to_str().unwrap(),
		])
		.unwrap();
		let points: Vec<[f64; 2]> = read_json(&output).unwrap();
		// 100 x 8 strip: 21 columns of 2 rows, 5 x 40 strip: 2 columns of 9 rows
		assert_eq!(points.len(), 21 * 2 + 2 * 9);
		assert_eq!(points[0], [0.0, 0.0]);
		assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
	}
}
