mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use mapmesh::{Pipeline, PipelineConfig};
use std::path::PathBuf;

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML file overriding the default pipeline configuration
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Build merged road corridors from a map snapshot
	Roads(tools::roads::Subcommand),

	/// Group and union the polygons of an intermediate file
	Merge(tools::merge::Subcommand),

	/// Remove the area of obstacle files from a polygon file
	Clip(tools::clip::Subcommand),

	/// Triangulate a polygon file into a simulator model
	Mesh(tools::mesh::Subcommand),

	/// Run the whole pipeline from a map snapshot to simulator models
	Build(tools::build::Subcommand),

	/// Sample grid points covering the polygons of a file
	Sample(tools::sample::Subcommand),

	/// Pick random route goals on the polygons of a file
	Goals(tools::goals::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let pipeline = Pipeline::new(PipelineConfig::load(cli.config.as_deref())?);
	match &cli.command {
		Commands::Roads(arguments) => tools::roads::run(arguments, &pipeline),
		Commands::Merge(arguments) => tools::merge::run(arguments, &pipeline),
		Commands::Clip(arguments) => tools::clip::run(arguments, &pipeline),
		Commands::Mesh(arguments) => tools::mesh::run(arguments, &pipeline),
		Commands::Build(arguments) => tools::build::run(arguments, &pipeline),
		Commands::Sample(arguments) => tools::sample::run(arguments, &pipeline),
		Commands::Goals(arguments) => tools::goals::run(arguments, &pipeline),
	}
}
