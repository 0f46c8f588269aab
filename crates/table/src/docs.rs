//! Status table → Markdown reference.
//!
//! Rows are grouped by century and rendered as one aligned table per group.
//! [`splice`] replaces the region between [`START_MARKER`] and [`END_MARKER`]
//! of a host document and leaves everything else byte-for-byte intact.

use itertools::Itertools;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::emit::binding_ident;
use crate::{CenturyGroup, StatusTable};

pub const START_MARKER: &str = "<!-- <Assertion Functions> -->";
pub const END_MARKER: &str = "<!-- </Assertion Functions> -->";

/// Headers for the per-century reference table.
const TABLE_HEADERS: [&str; 3] = ["Status Code", "Function _(Aliases)_", "Negated Function _(Aliases)_"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
	#[error("document has no `{}` marker", START_MARKER)]
	MissingStartMarker,
	#[error("document has no `{}` marker after the start marker", END_MARKER)]
	MissingEndMarker,
	#[error("`{}` appears before `{}`", END_MARKER, START_MARKER)]
	MarkersOutOfOrder,
}

/// Renders every century group, separated by blank lines.
pub fn render_reference(table: &StatusTable) -> String {
	table.groups().iter().map(render_group).join("\n\n")
}

fn render_group(group: &CenturyGroup<'_>) -> String {
	let rows = group
		.rows
		.iter()
		.map(|row| {
			[
				row.code().to_string(),
				function_cell(&row.entry.names),
				function_cell(&row.entry.negations),
			]
		})
		.collect_vec();

	format!(
		"#### {} (`{}`–`{}`)\n\n{}",
		group.title(),
		group.century,
		group.last(),
		markdown_table(TABLE_HEADERS, &rows)
	)
}

/// `` `NAME` <br> _(`ALIAS`, `OTHER`)_ ``
fn function_cell(names: &[String]) -> String {
	let mut idents = names.iter().map(|name| format!("`{}`", binding_ident(name)));
	let Some(canonical) = idents.next() else {
		return String::new();
	};
	let aliases = idents.join(", ");
	if aliases.is_empty() {
		canonical
	} else {
		format!("{canonical} <br> _({aliases})_")
	}
}

/// Left-aligned table with every column padded to its widest cell.
pub fn markdown_table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
	let mut widths = headers.map(|header| header.width().max(3));
	for row in rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let mut lines = Vec::with_capacity(rows.len() + 2);
	lines.push(table_line(headers, &widths));
	lines.push(table_line(widths.map(|width| "-".repeat(width)), &widths));
	for row in rows {
		lines.push(table_line(row, &widths));
	}
	lines.join("\n")
}

fn table_line<I>(cells: I, widths: &[usize]) -> String
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let padded = cells
		.into_iter()
		.zip(widths)
		.map(|(cell, &width)| {
			let cell = cell.as_ref();
			format!("{cell}{}", " ".repeat(width.saturating_sub(cell.width())))
		})
		.join(" | ");
	format!("| {padded} |")
}

/// Replaces the marked region of `document` with `reference`.
pub fn splice(document: &str, reference: &str) -> Result<String, DocError> {
	let start = document.find(START_MARKER).ok_or(DocError::MissingStartMarker)?;
	let region_start = start + START_MARKER.len();
	let Some(offset) = document[region_start..].find(END_MARKER) else {
		return Err(if document[..start].contains(END_MARKER) {
			DocError::MarkersOutOfOrder
		} else {
			DocError::MissingEndMarker
		});
	};
	let region_end = region_start + offset;

	Ok(format!(
		"{}{START_MARKER}\n\n{reference}\n\n{END_MARKER}{}",
		&document[..start],
		&document[region_end + END_MARKER.len()..]
	))
}

/// Splices the rendered reference for `table` into `document`.
pub fn regenerate(document: &str, table: &StatusTable) -> Result<String, DocError> {
	splice(document, &render_reference(table))
}
