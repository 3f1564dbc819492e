use anyhow::{Result, ensure};
use clap::Args;
use mapmesh::{Category, MapData, Pipeline, pipeline::write_corridors};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// map snapshot with projected nodes, ways and relations
	#[arg(required = true)]
	input_file: PathBuf,

	/// intermediate polygon file to write
	#[arg(required = true)]
	output_file: PathBuf,
}

pub fn run(arguments: &Subcommand, pipeline: &Pipeline) -> Result<()> {
	let map = MapData::from_path(&arguments.input_file)?;
	let roads = pipeline.layer(&map, Category::Road);
	ensure!(!roads.is_empty(), "no usable roads in {}", arguments.input_file.display());
	write_corridors(&arguments.output_file, &roads)?;
	log::info!("wrote {} roads to {}", roads.len(), arguments.output_file.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::{run_command, testdata};
	use mapmesh_core::PolygonFile;

	#[test]
	fn writes_merged_roads() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("roads.json");
		run_command(vec![
			"mapmesh",
			"roads",
			&testdata("map.json"),
			output.to_str().unwrap(),
		])
		.unwrap();
		let file = PolygonFile::from_path(&output).unwrap();
		// the two "Via Sparano" fragments are merged
		let record = &file.0["Via Sparano"];
		assert_eq!(record.source_ids, vec![101, 102]);
		assert_eq!(record.merged_polygons.len(), 1);
	}

	#[test]
	fn missing_input() {
		let err = run_command(vec!["mapmesh", "roads", "missing.json", "out.json"]).unwrap_err();
		assert!(format!("{err:#}").contains("not found"));
	}
}
