//! Truthiness of assertion conditions.
//!
//! Falsy values are `false`, zero, `NaN`, the empty string, `None`, `Err`
//! and the absent condition `()`. Everything else is truthy.

use std::convert::Infallible;
use std::num::NonZero;

/// A condition split into the value left on each path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truthiness<T, F> {
	Truthy(T),
	Falsy(F),
}

impl<T, F> Truthiness<T, F> {
	/// Swaps the paths: truthy becomes falsy and vice versa.
	pub fn negate(self) -> Truthiness<F, T> {
		match self {
			Self::Truthy(value) => Truthiness::Falsy(value),
			Self::Falsy(value) => Truthiness::Truthy(value),
		}
	}

	pub fn is_truthy(&self) -> bool {
		matches!(self, Self::Truthy(_))
	}
}

/// A value an assertion can test.
///
/// `Truthy` and `Falsy` are what remains known about the value on each path.
/// Negated assertions return `Truthy` when they pass, positive ones `Falsy`.
pub trait Condition: Sized {
	type Truthy;
	type Falsy;

	fn truthiness(self) -> Truthiness<Self::Truthy, Self::Falsy>;

	fn is_truthy(self) -> bool {
		self.truthiness().is_truthy()
	}
}

impl Condition for bool {
	type Truthy = ();
	type Falsy = ();

	fn truthiness(self) -> Truthiness<(), ()> {
		if self { Truthiness::Truthy(()) } else { Truthiness::Falsy(()) }
	}
}

/// The absent condition. Always falsy.
impl Condition for () {
	type Truthy = Infallible;
	type Falsy = ();

	fn truthiness(self) -> Truthiness<Infallible, ()> {
		Truthiness::Falsy(())
	}
}

impl<T> Condition for Option<T> {
	type Truthy = T;
	type Falsy = ();

	fn truthiness(self) -> Truthiness<T, ()> {
		match self {
			Some(value) => Truthiness::Truthy(value),
			None => Truthiness::Falsy(()),
		}
	}
}

impl<'a, T> Condition for &'a Option<T> {
	type Truthy = &'a T;
	type Falsy = ();

	fn truthiness(self) -> Truthiness<&'a T, ()> {
		self.as_ref().truthiness()
	}
}

impl<T, E> Condition for Result<T, E> {
	type Truthy = T;
	type Falsy = E;

	fn truthiness(self) -> Truthiness<T, E> {
		match self {
			Ok(value) => Truthiness::Truthy(value),
			Err(error) => Truthiness::Falsy(error),
		}
	}
}

impl<'a> Condition for &'a str {
	type Truthy = &'a str;
	type Falsy = ();

	fn truthiness(self) -> Truthiness<&'a str, ()> {
		if self.is_empty() { Truthiness::Falsy(()) } else { Truthiness::Truthy(self) }
	}
}

impl Condition for String {
	type Truthy = String;
	type Falsy = ();

	fn truthiness(self) -> Truthiness<String, ()> {
		if self.is_empty() { Truthiness::Falsy(()) } else { Truthiness::Truthy(self) }
	}
}

macro_rules! integer_condition {
	($($ty:ty),* $(,)?) => {
		$(
			impl Condition for $ty {
				type Truthy = NonZero<$ty>;
				type Falsy = ();

				fn truthiness(self) -> Truthiness<NonZero<$ty>, ()> {
					NonZero::new(self).map_or(Truthiness::Falsy(()), Truthiness::Truthy)
				}
			}
		)*
	};
}

integer_condition!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_condition {
	($($ty:ty),* $(,)?) => {
		$(
			impl Condition for $ty {
				type Truthy = $ty;
				type Falsy = ();

				fn truthiness(self) -> Truthiness<$ty, ()> {
					if self == 0.0 || self.is_nan() { Truthiness::Falsy(()) } else { Truthiness::Truthy(self) }
				}
			}
		)*
	};
}

float_condition!(f32, f64);
