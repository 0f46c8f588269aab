//! Assertions that raise HTTP responses.
//!
//! Every HTTP status in the status table gets a pair of assertions: a positive
//! one that raises when its condition is truthy, and a negated one that raises
//! when its condition is falsy. Raising means returning
//! [`Interrupt::Response`] through `Err`, so a handler can bail out with `?`
//! and a boundary further up turns the interrupt into the actual response.
//!
//! ```ignore
//! use http_assert::{AUTHORIZED, FOUND, Interrupt, NO_CONTENT};
//!
//! fn update(user: Option<User>, doc: Option<Document>) -> Result<(), Interrupt> {
//!     let user = AUTHORIZED.check_with(user, "Authentication required", ())?;
//!     let doc = FOUND.check(doc)?;
//!     // `user` and `doc` are unwrapped from here on.
//!     NO_CONTENT.check(true)
//! }
//! ```
//!
//! # Narrowing
//!
//! [`Condition`] splits a value into its truthy and falsy parts. A positive
//! assertion hands back the falsy part when it does not raise, a negated one the
//! truthy part, so `FOUND.check(Option<T>)` yields `T`.
//!
//! # Failure channels
//!
//! - [`Interrupt::Response`]: the assertion raised.
//! - [`Interrupt::Violation`]: the assertion was misused, e.g. a body on a
//!   status that never carries one. Never a response.

mod assertion;
pub mod bindings;
mod body;
mod condition;
mod init;
mod interrupt;
mod response;

pub use assertion::{Assertion, Binding, Negated};
pub use bindings::*;
pub use body::{Body, IntoBody};
pub use condition::{Condition, Truthiness};
pub use init::{IntoInit, ResponseInit};
pub use interrupt::{ContractViolation, Interrupt};
pub use response::Response;
