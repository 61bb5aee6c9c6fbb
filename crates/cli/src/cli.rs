use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "symscan")]
#[command(about = "Find function definitions in source files")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Scan configuration to use instead of the built-in languages
	#[arg(long, short = 'c', global = true)]
	pub config: Option<PathBuf>,

	/// Log scanner activity to stderr (RUST_LOG takes precedence)
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the symbol drop-down for a file
	List {
		file: PathBuf,

		/// Language to scan as, overriding the file extension
		#[arg(long, short = 'l')]
		language: Option<String>,
	},
	/// Print where a symbol is first defined, searching files in order
	Goto {
		symbol: String,

		#[arg(required = true)]
		files: Vec<PathBuf>,
	},
	/// Run the background scanner over files and print the keywords it found
	Keywords {
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},
}
