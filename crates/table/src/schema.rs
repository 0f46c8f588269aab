//! Status table schema.
//!
//! Mirrors the on-disk TOML layout one-to-one. Nothing here is validated;
//! see [`crate::StatusTable::from_spec`].

use serde::{Deserialize, Serialize};

/// One `[[status]]` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
	pub code: u16,
	/// Positive assertion identifiers. The first is canonical.
	pub names: Vec<String>,
	/// Negated assertion identifiers. The first is canonical.
	pub negations: Vec<String>,
	/// Reason phrase override.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
}

impl StatusEntry {
	pub fn new<N, G>(code: u16, names: N, negations: G) -> Self
	where
		N: IntoIterator,
		N::Item: Into<String>,
		G: IntoIterator,
		G::Item: Into<String>,
	{
		Self {
			code,
			names: names.into_iter().map(Into::into).collect(),
			negations: negations.into_iter().map(Into::into).collect(),
			reason: None,
		}
	}

	pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
		self.reason = Some(reason.into());
		self
	}

	/// Canonical positive identifier, if any.
	pub fn name(&self) -> Option<&str> {
		self.names.first().map(String::as_str)
	}

	/// Canonical negated identifier, if any.
	pub fn negation(&self) -> Option<&str> {
		self.negations.first().map(String::as_str)
	}
}

/// Whole table document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
	/// Codes that must never carry a body.
	#[serde(default)]
	pub no_body: Vec<u16>,
	#[serde(default, rename = "status")]
	pub entries: Vec<StatusEntry>,
}
