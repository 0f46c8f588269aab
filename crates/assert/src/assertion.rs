use tracing::{debug, trace};

use crate::{Body, Condition, Interrupt, IntoBody, IntoInit, Response, Truthiness};

/// A status code bound to its default body.
///
/// Raises when its condition is truthy. The generated bindings hold one of
/// these per table row; [`Negated`] wraps it for the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assertion {
	code: u16,
	default_body: Option<&'static str>,
}

impl Assertion {
	pub const fn new(code: u16, default_body: Option<&'static str>) -> Self {
		Self { code, default_body }
	}

	pub const fn code(&self) -> u16 {
		self.code
	}

	/// Body used when a raise gets no explicit one.
	pub const fn default_body(&self) -> Option<&'static str> {
		self.default_body
	}

	pub const fn negate(&self) -> Negated<'_> {
		Negated::new(self)
	}

	/// [`check_with`](Self::check_with) without body or init.
	pub fn check<C: Condition>(&self, condition: C) -> Result<C::Falsy, Interrupt> {
		self.check_with(condition, (), ())
	}

	/// Raises if `condition` is truthy, otherwise returns its falsy part.
	///
	/// # Errors
	///
	/// [`Interrupt::Response`] when raising, [`Interrupt::Violation`] when the
	/// response cannot be built for this status.
	pub fn check_with<C: Condition>(
		&self,
		condition: C,
		body: impl IntoBody,
		init: impl IntoInit,
	) -> Result<C::Falsy, Interrupt> {
		self.raise_if(condition.truthiness(), body, init)
	}

	/// Raises on [`Truthiness::Truthy`]. `body` and `init` are only resolved
	/// when raising.
	pub fn raise_if<T, F>(
		&self,
		truthiness: Truthiness<T, F>,
		body: impl IntoBody,
		init: impl IntoInit,
	) -> Result<F, Interrupt> {
		match truthiness {
			Truthiness::Truthy(_) => Err(self.interrupt(body, init)),
			Truthiness::Falsy(rest) => Ok(rest),
		}
	}

	fn interrupt(&self, body: impl IntoBody, init: impl IntoInit) -> Interrupt {
		let body = body.into_body().or_else(|| self.default_body.map(Body::from_static));
		match Response::new(self.code, body, init.into_init()) {
			Ok(response) => {
				trace!(status = self.code, "assertion.raise");
				response.into()
			}
			Err(violation) => {
				debug!(status = self.code, %violation, "assertion.violation");
				violation.into()
			}
		}
	}
}

/// The inverse of an [`Assertion`]: raises when its condition is falsy.
///
/// Shares the wrapped assertion's code, default body and raising path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negated<'a> {
	positive: &'a Assertion,
}

impl<'a> Negated<'a> {
	pub const fn new(positive: &'a Assertion) -> Self {
		Self { positive }
	}

	pub const fn positive(&self) -> &'a Assertion {
		self.positive
	}

	pub const fn code(&self) -> u16 {
		self.positive.code
	}

	pub fn check<C: Condition>(&self, condition: C) -> Result<C::Truthy, Interrupt> {
		self.check_with(condition, (), ())
	}

	/// Raises if `condition` is falsy, otherwise returns its truthy part.
	///
	/// # Errors
	///
	/// Same as [`Assertion::check_with`].
	pub fn check_with<C: Condition>(
		&self,
		condition: C,
		body: impl IntoBody,
		init: impl IntoInit,
	) -> Result<C::Truthy, Interrupt> {
		self.positive.raise_if(condition.truthiness().negate(), body, init)
	}
}

/// A generated binding looked up by its table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
	Positive(&'static Assertion),
	Negated(&'static Negated<'static>),
}

impl Binding {
	pub fn code(&self) -> u16 {
		self.assertion().code()
	}

	pub fn is_negated(&self) -> bool {
		matches!(self, Self::Negated(_))
	}

	/// The positive assertion behind this binding.
	pub fn assertion(&self) -> &'static Assertion {
		match *self {
			Self::Positive(assertion) => assertion,
			Self::Negated(negated) => negated.positive(),
		}
	}

	pub fn check<C: Condition>(&self, condition: C) -> Result<(), Interrupt> {
		self.check_with(condition, (), ())
	}

	/// Like the typed checks, with the narrowed value dropped.
	pub fn check_with<C: Condition>(
		&self,
		condition: C,
		body: impl IntoBody,
		init: impl IntoInit,
	) -> Result<(), Interrupt> {
		match self {
			Self::Positive(assertion) => assertion.check_with(condition, body, init).map(drop),
			Self::Negated(negated) => negated.check_with(condition, body, init).map(drop),
		}
	}
}
