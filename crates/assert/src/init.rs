use http::header::IntoHeaderName;
use http::{HeaderMap, HeaderValue, StatusCode};

/// Extra response metadata for a raise: headers, status text and an optional
/// status that replaces the one bound to the assertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseInit {
	pub status: Option<StatusCode>,
	pub headers: HeaderMap,
	pub status_text: Option<String>,
}

impl ResponseInit {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a header value.
	pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
		self.headers.append(name, value);
		self
	}

	/// Raises with `status` instead of the assertion's own code.
	pub fn status(mut self, status: StatusCode) -> Self {
		self.status = Some(status);
		self
	}

	pub fn status_text(mut self, text: impl Into<String>) -> Self {
		self.status_text = Some(text.into());
		self
	}
}

impl From<HeaderMap> for ResponseInit {
	fn from(headers: HeaderMap) -> Self {
		Self {
			headers,
			..Self::default()
		}
	}
}

/// Anything accepted as the `init` argument of an assertion.
///
/// Mirrors [`IntoBody`](crate::IntoBody): `()`/`None` for absent, a closure
/// for a value built only when raising.
pub trait IntoInit {
	fn into_init(self) -> Option<ResponseInit>;
}

impl IntoInit for () {
	fn into_init(self) -> Option<ResponseInit> {
		None
	}
}

impl IntoInit for ResponseInit {
	fn into_init(self) -> Option<ResponseInit> {
		Some(self)
	}
}

impl IntoInit for HeaderMap {
	fn into_init(self) -> Option<ResponseInit> {
		Some(self.into())
	}
}

impl<I: IntoInit> IntoInit for Option<I> {
	fn into_init(self) -> Option<ResponseInit> {
		self.and_then(IntoInit::into_init)
	}
}

impl<F, I> IntoInit for F
where
	F: FnOnce() -> I,
	I: IntoInit,
{
	fn into_init(self) -> Option<ResponseInit> {
		self().into_init()
	}
}
