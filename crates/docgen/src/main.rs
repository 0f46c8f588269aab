//! Docgen binary for http-assert.
//!
//! * `readme --check` fails when the reference between the markers is stale.
//! * `readme --write` regenerates it in place.
//! * `bindings` prints the Rust module the build script would emit.

use std::path::Path;

use anyhow::{Context, bail};
use clap::Parser;
use http_assert_table::StatusTable;
use http_assert_table::docs::regenerate;
use http_assert_table::emit::render_bindings;
use tracing::{debug, info};

mod cli;

use cli::{Cli, Command};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HTTP_ASSERT_LOG";

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::Readme { check, write, path, table } => {
			debug!(check, write, path = %path.display(), "readme");
			let table = load_table(table.as_deref())?;
			if check {
				check_readme(&path, &table)
			} else {
				write_readme(&path, &table).map(drop)
			}
		}
		Command::Bindings { table } => {
			let table = load_table(table.as_deref())?;
			print!("{}", render_bindings(&table));
			Ok(())
		}
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn load_table(path: Option<&Path>) -> anyhow::Result<StatusTable> {
	let table = match path {
		Some(path) => StatusTable::read(path).with_context(|| format!("loading status table {}", path.display()))?,
		None => StatusTable::builtin().context("loading built-in status table")?,
	};
	debug!(entries = table.len(), "status table loaded");
	Ok(table)
}

/// Line endings are compared as `\n` so a CRLF checkout is not reported stale.
fn normalize(text: &str) -> String {
	text.replace("\r\n", "\n")
}

/// A document read from disk and its regenerated contents.
///
/// `expected` is spliced into the text as read, so bytes outside the markers
/// keep their original line endings.
struct Readme {
	current: String,
	expected: String,
}

impl Readme {
	fn load(path: &Path, table: &StatusTable) -> anyhow::Result<Self> {
		let current = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
		let expected = regenerate(&current, table).with_context(|| format!("regenerating {}", path.display()))?;
		Ok(Self { current, expected })
	}

	fn is_current(&self) -> bool {
		normalize(&self.current) == normalize(&self.expected)
	}
}

fn check_readme(path: &Path, table: &StatusTable) -> anyhow::Result<()> {
	if !Readme::load(path, table)?.is_current() {
		bail!(
			"{} is out of date; run `http-assert-docgen readme --write --path {}`",
			path.display(),
			path.display()
		);
	}
	info!(path = %path.display(), "reference is up to date");
	Ok(())
}

/// Rewrites `path` if its reference changed. Returns whether it did.
fn write_readme(path: &Path, table: &StatusTable) -> anyhow::Result<bool> {
	let readme = Readme::load(path, table)?;
	if readme.is_current() {
		info!(path = %path.display(), "reference already up to date");
		return Ok(false);
	}
	std::fs::write(path, readme.expected).with_context(|| format!("writing {}", path.display()))?;
	info!(path = %path.display(), "reference regenerated");
	Ok(true)
}
