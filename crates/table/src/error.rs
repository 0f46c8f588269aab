//! Error types for loading and validating the status table.

use std::path::PathBuf;

use thiserror::Error;

/// Which list of a row an identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
	/// First item of `names`.
	Name,
	/// Later item of `names`.
	Alias,
	/// First item of `negations`.
	Negation,
	/// Later item of `negations`.
	NegationAlias,
}

impl NameRole {
	pub(crate) fn of(negated: bool, index: usize) -> Self {
		match (negated, index) {
			(false, 0) => Self::Name,
			(false, _) => Self::Alias,
			(true, 0) => Self::Negation,
			(true, _) => Self::NegationAlias,
		}
	}
}

impl std::fmt::Display for NameRole {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Name => write!(f, "name"),
			Self::Alias => write!(f, "alias"),
			Self::Negation => write!(f, "negation"),
			Self::NegationAlias => write!(f, "negation alias"),
		}
	}
}

/// Errors that abort table loading. No bindings or docs are produced after one.
#[derive(Debug, Error)]
pub enum TableError {
	/// Error parsing TOML syntax or shape (including a missing `code`).
	#[error("table parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// Error reading a table file or writing generated output.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path to the file involved.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A required build environment variable is missing.
	#[error("missing build environment variable {0}")]
	MissingEnv(&'static str),

	#[error("status {code} is outside 200..=599")]
	CodeOutOfRange { code: u16 },

	#[error("status {code} is listed more than once")]
	DuplicateCode { code: u16 },

	#[error("no_body code {code} is not a valid status code")]
	InvalidNoBodyCode { code: u16 },

	#[error("status {code} has no names")]
	EmptyNames { code: u16 },

	#[error("status {code} has no negations")]
	EmptyNegations { code: u16 },

	/// Identifier is not lower snake_case.
	#[error("status {code}: {role} {name:?} is not a snake_case identifier")]
	InvalidName { code: u16, role: NameRole, name: String },

	/// Identifier would shadow an item the generated module already defines.
	#[error("status {code}: {role} {name:?} is reserved by the generated bindings")]
	ReservedName { code: u16, role: NameRole, name: String },

	/// Two bindings would share one name.
	#[error("{role} {name:?} of status {code} is already bound as {existing_role} of status {existing_code}")]
	DuplicateName {
		name: String,
		code: u16,
		role: NameRole,
		existing_code: u16,
		existing_role: NameRole,
	},

	#[error("status {code} has no standard reason phrase; set `reason`")]
	MissingReason { code: u16 },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
