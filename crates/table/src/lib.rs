//! Status table for `http-assert`.
//!
//! # Purpose
//!
//! The status table is the single source of truth for the assertion surface.
//! Every `[[status]]` row names one HTTP status code, the identifiers of its
//! positive assertion, and the identifiers of its negated assertion. This crate
//! turns that table into:
//!
//! 1. **Rust bindings** ([`emit::render_bindings`]), generated by the
//!    `http-assert` build script and `include!`d by the runtime.
//! 2. **Reference tables** ([`docs::render_reference`]), spliced into
//!    `README.md` by `http-assert-docgen`.
//!
//! # Pipeline
//!
//! Source text is deserialized into [`TableSpec`], then validated into a
//! [`StatusTable`]. Validation is all-or-nothing: a table with a single bad row
//! is rejected before anything is emitted, so generated code never silently
//! drops a binding.
//!
//! # Invariants
//!
//! - Codes are unique and lie in `200..=599`.
//! - `names` and `negations` are non-empty for every row.
//! - Every identifier is snake_case and unique across the whole table.
//! - Every code resolves to a reason phrase (the row override or the standard one).

pub mod compile;
pub mod docs;
pub mod emit;
mod error;
mod schema;
mod table;

pub use error::{NameRole, Result, TableError};
pub use schema::{StatusEntry, TableSpec};
pub use table::{CenturyGroup, StatusRow, StatusTable};

/// The shipped status table.
pub const BUILTIN_TABLE: &str = include_str!("../assets/status_codes.toml");

/// Environment variable naming an alternative table file for build scripts.
pub const TABLE_ENV: &str = "HTTP_ASSERT_TABLE";
