use anyhow::Result;
use clap::Args;
use mapmesh::{Pipeline, pipeline::read_corridors};
use mapmesh_core::io::write_json;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// intermediate polygon file of the drivable surface
	#[arg(required = true)]
	input_file: PathBuf,

	/// JSON file receiving the goals as a flat [x0, y0, x1, y1, ...] list
	#[arg(required = true)]
	output_file: PathBuf,

	/// number of goals; defaults to the configured goal count
	#[arg(long, short = 'n')]
	count: Option<usize>,

	/// seed of the random generator, for repeatable goals
	#[arg(long)]
	seed: Option<u64>,
}

pub fn run(arguments: &Subcommand, pipeline: &Pipeline) -> Result<()> {
	let corridors = read_corridors(&arguments.input_file, None, &pipeline.config().roads)?;
	let goals = pipeline.goals(&corridors, arguments.count, arguments.seed)?;
	let flat: Vec<f64> = goals.iter().flatten().copied().collect();
	write_json(&arguments.output_file, &flat)?;
	log::info!("wrote {} route goals to {}", goals.len(), arguments.output_file.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::{run_command, testdata};
	use mapmesh_core::io::read_json;
	use pretty_assertions::assert_eq;

	fn goals(dir: &std::path::Path, seed: &str) -> Vec<f64> {
		let output = dir.join(format!("goals_{seed}.json"));
		run_command(vec![
			"mapmesh",
			"goals",
			"-n",
			"6",
			"--seed",
			seed,
			&testdata("legacy_polygons.json"),
			output.to_str().unwrap(),
		])
		.unwrap();
		read_json(&output).unwrap()
	}

	#[test]
	fn writes_flat_seeded_list() {
		let dir = tempfile::tempdir().unwrap();
		let first = goals(dir.path(), "3");
		assert_eq!(first.len(), 2 * 6);
		assert!(first.iter().all(|value| ((value * 100.0).round() - value * 100.0).abs() < 1e-6));
		assert_eq!(first, goals(dir.path(), "3"));
	}

	#[test]
	fn count_defaults_to_config() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("goals.json");
		run_command(vec![
			"mapmesh",
			"--config",
			&testdata("config.yml"),
			"goals",
			&testdata("legacy_polygons.json"),
			output.to_str().unwrap(),
		])
		.unwrap();
		let flat: Vec<f64> = read_json(&output).unwrap();
		assert_eq!(flat.len(), 2 * 20);
	}
}
