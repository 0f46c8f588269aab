use std::borrow::Cow;

use bytes::Bytes;
use serde::Serialize;

/// Raw payload of a raised [`Response`](crate::Response).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Body(Bytes);

impl Body {
	pub const fn from_static(text: &'static str) -> Self {
		Self(Bytes::from_static(text.as_bytes()))
	}

	/// Serializes `value` as a JSON body.
	pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
		serde_json::to_vec(value).map(Self::from)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Body decoded as UTF-8, replacing invalid sequences.
	pub fn text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.0)
	}

	pub fn into_bytes(self) -> Bytes {
		self.0
	}
}

impl From<&'static str> for Body {
	fn from(text: &'static str) -> Self {
		Self::from_static(text)
	}
}

impl From<String> for Body {
	fn from(text: String) -> Self {
		Self(Bytes::from(text))
	}
}

impl From<Vec<u8>> for Body {
	fn from(bytes: Vec<u8>) -> Self {
		Self(Bytes::from(bytes))
	}
}

impl From<Bytes> for Body {
	fn from(bytes: Bytes) -> Self {
		Self(bytes)
	}
}

/// Anything accepted as the `body` argument of an assertion.
///
/// `()` and `None` mean "no explicit body", which lets the bound default
/// apply. A zero-argument closure is only called when the assertion raises.
pub trait IntoBody {
	fn into_body(self) -> Option<Body>;
}

impl IntoBody for () {
	fn into_body(self) -> Option<Body> {
		None
	}
}

impl IntoBody for Body {
	fn into_body(self) -> Option<Body> {
		Some(self)
	}
}

impl IntoBody for &str {
	fn into_body(self) -> Option<Body> {
		Some(Body::from(self.to_owned()))
	}
}

impl IntoBody for String {
	fn into_body(self) -> Option<Body> {
		Some(Body::from(self))
	}
}

impl IntoBody for Vec<u8> {
	fn into_body(self) -> Option<Body> {
		Some(Body::from(self))
	}
}

impl IntoBody for Bytes {
	fn into_body(self) -> Option<Body> {
		Some(Body::from(self))
	}
}

impl IntoBody for serde_json::Value {
	fn into_body(self) -> Option<Body> {
		Some(Body::from(self.to_string()))
	}
}

impl<B: IntoBody> IntoBody for Option<B> {
	fn into_body(self) -> Option<Body> {
		self.and_then(IntoBody::into_body)
	}
}

impl<F, B> IntoBody for F
where
	F: FnOnce() -> B,
	B: IntoBody,
{
	fn into_body(self) -> Option<Body> {
		self().into_body()
	}
}
