//! Validated status table.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

use http::StatusCode;

use crate::emit::{RESERVED_IDENTS, binding_ident};
use crate::schema::{StatusEntry, TableSpec};
use crate::{BUILTIN_TABLE, NameRole, Result, TableError};

/// Status table that passed validation.
///
/// Row order is the source order and drives emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
	entries: Vec<StatusEntry>,
	reasons: Vec<String>,
	no_body: BTreeSet<u16>,
}

/// One validated row with its resolved reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRow<'a> {
	pub entry: &'a StatusEntry,
	pub reason: &'a str,
	pub no_body: bool,
}

impl<'a> StatusRow<'a> {
	pub fn code(&self) -> u16 {
		self.entry.code
	}

	/// Canonical positive identifier.
	pub fn name(&self) -> &'a str {
		&self.entry.names[0]
	}

	/// Canonical negated identifier.
	pub fn negation(&self) -> &'a str {
		&self.entry.negations[0]
	}

	/// `"404 Not Found"`.
	pub fn status_line(&self) -> String {
		format!("{} {}", self.entry.code, self.reason)
	}

	/// Body used when the caller supplies none. Absent for no-body codes.
	pub fn default_body(&self) -> Option<&'a str> {
		(!self.no_body).then_some(self.reason)
	}
}

/// Rows sharing a status century (`2xx`, `3xx`, ...), in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenturyGroup<'a> {
	pub century: u16,
	pub rows: Vec<StatusRow<'a>>,
}

impl CenturyGroup<'_> {
	pub fn title(&self) -> &'static str {
		// Codes are range-checked during validation.
		match self.century {
			200 => "Successful Responses",
			300 => "Redirection Responses",
			400 => "Client Error Responses",
			_ => "Server Error Responses",
		}
	}

	/// Last code of the century.
	pub fn last(&self) -> u16 {
		self.century + 99
	}
}

impl StatusTable {
	/// Parses and validates TOML table source.
	pub fn parse(source: &str) -> Result<Self> {
		let spec: TableSpec = toml::from_str(source)?;
		Self::from_spec(spec)
	}

	/// The table shipped with this crate.
	pub fn builtin() -> Result<Self> {
		Self::parse(BUILTIN_TABLE)
	}

	/// Reads, parses and validates a table file.
	pub fn read(path: &Path) -> Result<Self> {
		let source = fs::read_to_string(path).map_err(|error| TableError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&source)
	}

	/// Validates a deserialized table. The first violation aborts.
	pub fn from_spec(spec: TableSpec) -> Result<Self> {
		let mut codes = HashSet::with_capacity(spec.entries.len());
		let mut bound: HashMap<String, (u16, NameRole)> = HashMap::new();
		let mut reasons = Vec::with_capacity(spec.entries.len());

		for entry in &spec.entries {
			let code = entry.code;
			if !(200..=599).contains(&code) {
				return Err(TableError::CodeOutOfRange { code });
			}
			if !codes.insert(code) {
				return Err(TableError::DuplicateCode { code });
			}
			if entry.names.is_empty() {
				return Err(TableError::EmptyNames { code });
			}
			if entry.negations.is_empty() {
				return Err(TableError::EmptyNegations { code });
			}

			for (negated, list) in [(false, &entry.names), (true, &entry.negations)] {
				for (index, name) in list.iter().enumerate() {
					let role = NameRole::of(negated, index);
					if !is_snake_ident(name) {
						return Err(TableError::InvalidName {
							code,
							role,
							name: name.clone(),
						});
					}
					let ident = binding_ident(name);
					if RESERVED_IDENTS.contains(&ident.as_str()) {
						return Err(TableError::ReservedName {
							code,
							role,
							name: name.clone(),
						});
					}
					if let Some(&(existing_code, existing_role)) = bound.get(&ident) {
						return Err(TableError::DuplicateName {
							name: name.clone(),
							code,
							role,
							existing_code,
							existing_role,
						});
					}
					bound.insert(ident, (code, role));
				}
			}

			let reason = reason_phrase(entry).ok_or(TableError::MissingReason { code })?;
			reasons.push(reason.to_owned());
		}

		for &code in &spec.no_body {
			if !(100..=599).contains(&code) {
				return Err(TableError::InvalidNoBodyCode { code });
			}
		}

		Ok(Self {
			entries: spec.entries,
			reasons,
			no_body: spec.no_body.into_iter().collect(),
		})
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[StatusEntry] {
		&self.entries
	}

	/// Rows in table order.
	pub fn rows(&self) -> impl Iterator<Item = StatusRow<'_>> {
		self.entries
			.iter()
			.zip(&self.reasons)
			.map(|(entry, reason)| StatusRow {
				entry,
				reason,
				no_body: self.no_body.contains(&entry.code),
			})
	}

	pub fn row(&self, code: u16) -> Option<StatusRow<'_>> {
		self.rows().find(|row| row.code() == code)
	}

	/// No-body codes in ascending order.
	pub fn no_body_codes(&self) -> impl Iterator<Item = u16> + '_ {
		self.no_body.iter().copied()
	}

	pub fn is_no_body(&self, code: u16) -> bool {
		self.no_body.contains(&code)
	}

	/// Rows grouped by century. Groups ascend; rows keep table order.
	pub fn groups(&self) -> Vec<CenturyGroup<'_>> {
		let mut by_century: BTreeMap<u16, Vec<StatusRow<'_>>> = BTreeMap::new();
		for row in self.rows() {
			by_century.entry(row.code() / 100 * 100).or_default().push(row);
		}
		by_century
			.into_iter()
			.map(|(century, rows)| CenturyGroup { century, rows })
			.collect()
	}
}

/// Row override first, then the standard phrase.
fn reason_phrase(entry: &StatusEntry) -> Option<&str> {
	entry
		.reason
		.as_deref()
		.or_else(|| StatusCode::from_u16(entry.code).ok()?.canonical_reason())
}

/// `[a-z][a-z0-9]*` segments joined by single underscores.
fn is_snake_ident(name: &str) -> bool {
	name.starts_with(|c: char| c.is_ascii_lowercase())
		&& name.split('_').all(|segment| {
			!segment.is_empty() && segment.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
		})
}
