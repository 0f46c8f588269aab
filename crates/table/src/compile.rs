//! Build-script infrastructure.
//!
//! Used from `build.rs` to locate the status table, register rerun triggers
//! and write generated sources into `OUT_DIR`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, StatusTable, TABLE_ENV, TableError};

pub struct BuildCtx {
	pub manifest_dir: PathBuf,
	pub out_dir: PathBuf,
}

impl BuildCtx {
	/// Reads `CARGO_MANIFEST_DIR` and `OUT_DIR` from the build environment.
	pub fn from_env() -> Result<Self> {
		let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").ok_or(TableError::MissingEnv("CARGO_MANIFEST_DIR"))?;
		let out_dir = env::var_os("OUT_DIR").ok_or(TableError::MissingEnv("OUT_DIR"))?;
		Ok(Self {
			manifest_dir: PathBuf::from(manifest_dir),
			out_dir: PathBuf::from(out_dir),
		})
	}

	pub fn asset(&self, rel: impl AsRef<Path>) -> PathBuf {
		self.manifest_dir.join(rel)
	}

	pub fn rerun_if_changed(&self, path: &Path) {
		println!("cargo:rerun-if-changed={}", path.display());
	}

	pub fn rerun_if_env_changed(&self, var: &str) {
		println!("cargo:rerun-if-env-changed={var}");
	}

	/// Loads the table named by [`TABLE_ENV`], or the builtin table when unset.
	///
	/// Relative override paths resolve against the manifest directory.
	pub fn load_table(&self) -> Result<StatusTable> {
		self.rerun_if_env_changed(TABLE_ENV);
		match env::var_os(TABLE_ENV) {
			Some(path) => {
				let path = self.asset(path);
				self.rerun_if_changed(&path);
				StatusTable::read(&path)
			}
			None => StatusTable::builtin(),
		}
	}

	/// Writes generated source into `OUT_DIR`, returning the written path.
	pub fn write_source(&self, filename: &str, contents: &str) -> Result<PathBuf> {
		let path = self.out_dir.join(filename);
		fs::write(&path, contents).map_err(|error| TableError::Io { path: path.clone(), error })?;
		Ok(path)
	}
}
