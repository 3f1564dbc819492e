use anyhow::Result;
use clap::Args;
use mapmesh::{
	Pipeline,
	pipeline::{read_corridors, write_corridors},
};
use mapmesh_geometry::MergeKey;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// intermediate polygon file
	#[arg(required = true)]
	input_file: PathBuf,

	/// merged polygon file to write
	#[arg(required = true)]
	output_file: PathBuf,

	/// keep every entry separate instead of grouping by name
	#[arg(long)]
	by_id: bool,
}

pub fn run(arguments: &Subcommand, pipeline: &Pipeline) -> Result<()> {
	let corridors = read_corridors(&arguments.input_file, None, &pipeline.config().roads)?;
	let key = if arguments.by_id {
		MergeKey::ById
	} else {
		pipeline.merge_key()
	};
	let merged = pipeline.merge(corridors, key);
	write_corridors(&arguments.output_file, &merged)?;
	log::info!("wrote {} entities to {}", merged.len(), arguments.output_file.display());
	Ok(())
}
