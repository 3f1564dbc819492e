use anyhow::Result;
use clap::Args;
use mapmesh::Pipeline;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// map snapshot with projected nodes, ways and relations
	#[arg(required = true)]
	input_file: PathBuf,

	/// directory receiving polygon files, models and world.sdf
	#[arg(required = true)]
	output_dir: PathBuf,
}

pub fn run(arguments: &Subcommand, pipeline: &Pipeline) -> Result<()> {
	let report = pipeline.build(&arguments.input_file, &arguments.output_dir)?;
	for layer in &report.layers {
		println!("{:<10} {:>6} entities {:>8} faces", layer.category, layer.entities, layer.faces);
	}
	Ok(())
}
