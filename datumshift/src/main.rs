mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

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

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert points between WGS84, GCJ-02 and BD-09
	Convert(tools::convert::Subcommand),

	/// Project WGS84 degrees to Web Mercator meters
	Project(tools::project::Subcommand),

	/// Unproject Web Mercator meters to WGS84 degrees
	Unproject(tools::project::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Project(arguments) => tools::project::run(arguments, tools::project::Direction::Forward),
		Commands::Unproject(arguments) => tools::project::run(arguments, tools::project::Direction::Inverse),
	}
}
