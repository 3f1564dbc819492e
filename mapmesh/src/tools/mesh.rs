use anyhow::{Result, ensure};
use clap::Args;
use mapmesh::{Category, Pipeline, pipeline::read_corridors, scene::write_model};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// intermediate polygon file
	#[arg(required = true)]
	input_file: PathBuf,

	/// directory receiving the model directory
	#[arg(required = true)]
	output_dir: PathBuf,

	/// extrusion profile for every record; defaults to the category stored in each record
	#[arg(long, short, value_enum)]
	kind: Option<Category>,

	/// model name; defaults to the name of the category's model
	#[arg(long, short)]
	name: Option<String>,
}

pub fn run(arguments: &Subcommand, pipeline: &Pipeline) -> Result<()> {
	let corridors = read_corridors(&arguments.input_file, arguments.kind, &pipeline.config().roads)?;
	ensure!(
		!corridors.is_empty(),
		"no usable polygons in {}",
		arguments.input_file.display()
	);

	// the model is named and coloured after the forced kind or the first record
	let category = arguments.kind.unwrap_or(corridors[0].category);
	let name = arguments
		.name
		.clone()
		.unwrap_or_else(|| category.model_name().to_string());
	let mesh = pipeline.mesh(&corridors, arguments.kind);
	ensure!(!mesh.is_empty(), "triangulation of {} produced no faces", arguments.input_file.display());

	let model_dir = write_model(&arguments.output_dir, &name, category, &mesh)?;
	log::info!("model written to {}", model_dir.display());
	Ok(())
}
