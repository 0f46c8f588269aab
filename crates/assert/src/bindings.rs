//! Generated assertion statics, one pair per status table row.
//!
//! The items below come from the build script. Aliases are `pub use`
//! re-exports, so `SUCCESSFUL` and `OK` are the same static.

use crate::{Assertion, Binding, Negated};

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

/// Finds a binding by its table name (`"not_found"`, `"found"`, ...).
pub fn lookup(name: &str) -> Option<Binding> {
	BINDINGS
		.iter()
		.find_map(|(candidate, binding)| (*candidate == name).then_some(*binding))
}
