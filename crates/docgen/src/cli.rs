//! Command-line schema for the docgen binary.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "http-assert-docgen")]
#[command(about = "Keeps the http-assert reference docs in sync with the status table")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Regenerate the assertion reference inside a Markdown document
	#[command(group(ArgGroup::new("mode").required(true).args(["check", "write"])))]
	Readme {
		/// Fail if the document is out of date
		#[arg(long)]
		check: bool,

		/// Rewrite the document in place
		#[arg(long)]
		write: bool,

		/// Document holding the reference markers
		#[arg(long, value_name = "PATH", default_value = "README.md")]
		path: PathBuf,

		/// Status table to render instead of the built-in one
		#[arg(long, value_name = "PATH")]
		table: Option<PathBuf>,
	},
	/// Print the Rust bindings generated for a status table
	Bindings {
		/// Status table to render instead of the built-in one
		#[arg(long, value_name = "PATH")]
		table: Option<PathBuf>,
	},
}
