//! Status table → Rust bindings.
//!
//! The output is `include!`d inside `http_assert::bindings`, where
//! `Assertion`, `Negated` and `Binding` are in scope.
//! Each row emits, in order: the positive static, re-exports for its aliases,
//! the negated static wrapping the positive one, re-exports for the negation
//! aliases. `NO_BODY_CODES` and the `BINDINGS` registry follow the rows.

use heck::ToShoutySnakeCase;
use itertools::Itertools;

use crate::{StatusRow, StatusTable};

/// Items the generated module defines besides the row bindings.
pub const RESERVED_IDENTS: &[&str] = &[NO_BODY_CODES, BINDINGS];

const NO_BODY_CODES: &str = "NO_BODY_CODES";
const BINDINGS: &str = "BINDINGS";

/// Rust identifier bound for a table name (`not_found` → `NOT_FOUND`).
pub fn binding_ident(name: &str) -> String {
	name.to_shouty_snake_case()
}

/// Renders the complete generated module body.
pub fn render_bindings(table: &StatusTable) -> String {
	let mut generated = String::from("// @generated from the http-assert status table. Do not edit.\n");

	for row in table.rows() {
		generated.push('\n');
		generated.push_str(&render_row(&row));
	}

	generated.push_str("\n/// Status codes whose responses never carry a body.\n");
	generated.push_str(&format!(
		"pub const {NO_BODY_CODES}: &[u16] = &[{}];\n",
		table.no_body_codes().join(", ")
	));

	generated.push_str("\n/// Every binding keyed by its table name, in emission order.\n");
	generated.push_str(&format!("pub static {BINDINGS}: &[(&str, Binding)] = &[\n"));
	for row in table.rows() {
		let positive = binding_ident(row.name());
		for name in &row.entry.names {
			generated.push_str(&format!("\t({name:?}, Binding::Positive(&{positive})),\n"));
		}
		let negated = binding_ident(row.negation());
		for name in &row.entry.negations {
			generated.push_str(&format!("\t({name:?}, Binding::Negated(&{negated})),\n"));
		}
	}
	generated.push_str("];\n");

	generated
}

/// Bindings and docs for a single row.
pub fn render_row(row: &StatusRow<'_>) -> String {
	let status = row.status_line();
	let positive = binding_ident(row.name());
	let negated = binding_ident(row.negation());
	let mut out = String::new();

	out.push_str(&doc_block(&status, false, row.no_body));
	out.push_str(&doc_aliases(&row.entry.names));
	out.push_str(&format!(
		"pub static {positive}: Assertion = Assertion::new({}, {:?});\n",
		row.code(),
		row.default_body()
	));
	out.push_str(&reexports(&positive, &row.entry.names[1..]));

	out.push_str(&doc_block(&status, true, row.no_body));
	out.push_str(&doc_aliases(&row.entry.negations));
	out.push_str(&format!("pub static {negated}: Negated<'static> = Negated::new(&{positive});\n"));
	out.push_str(&reexports(&negated, &row.entry.negations[1..]));

	out
}

fn doc_block(status: &str, negated: bool, no_body: bool) -> String {
	let truthiness = if negated { "falsy" } else { "truthy" };
	let mut doc = format!(
		"/// Raises a [`Response`](crate::Response) with status `{status}` if the condition is {truthiness}.
///
/// * `condition` - The condition to assert. If {truthiness}, a response is raised.
/// * `body` - Optional response body, or a closure returning one.
/// * `init` - Optional response init, or a closure returning one.
///
/// # Errors
///
/// [`Interrupt::Response`](crate::Interrupt::Response) with status `{status}` and the given body/init.
"
	);
	if no_body {
		doc.push_str("/// [`Interrupt::Violation`](crate::Interrupt::Violation) if a non-empty body is given: this status never carries one.\n");
	}
	doc
}

fn doc_aliases(names: &[String]) -> String {
	names.iter().map(|name| format!("#[doc(alias = {name:?})]\n")).collect()
}

fn reexports(ident: &str, aliases: &[String]) -> String {
	aliases
		.iter()
		.map(|alias| format!("pub use self::{ident} as {};\n", binding_ident(alias)))
		.collect()
}
