use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::bindings::NO_BODY_CODES;
use crate::{Body, ContractViolation, ResponseInit};

/// A response raised by an assertion.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
	status: StatusCode,
	status_text: Option<String>,
	headers: HeaderMap,
	body: Option<Body>,
}

impl Response {
	/// Builds a response for `code`, or for the init's status when it sets one.
	///
	/// # Errors
	///
	/// * [`ContractViolation::InvalidStatus`] if the status in effect is
	///   outside `100..=999`.
	/// * [`ContractViolation::BodyNotAllowed`] if the status in effect never
	///   carries a body and `body` is non-empty.
	pub fn new(code: u16, body: Option<Body>, init: Option<ResponseInit>) -> Result<Self, ContractViolation> {
		let ResponseInit {
			status,
			headers,
			status_text,
		} = init.unwrap_or_default();
		let status = match status {
			Some(status) => status,
			None => StatusCode::from_u16(code).map_err(|_| ContractViolation::InvalidStatus { code })?,
		};

		if NO_BODY_CODES.contains(&status.as_u16()) && body.as_ref().is_some_and(|body| !body.is_empty()) {
			return Err(ContractViolation::BodyNotAllowed { status });
		}

		Ok(Self {
			status,
			status_text,
			headers,
			body,
		})
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// Explicit status text from the init, else the canonical reason phrase.
	pub fn status_text(&self) -> &str {
		self.status_text
			.as_deref()
			.or_else(|| self.status.canonical_reason())
			.unwrap_or_default()
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	pub fn body(&self) -> Option<&Body> {
		self.body.as_ref()
	}

	/// Body as text; empty when there is none.
	pub fn text(&self) -> String {
		self.body.as_ref().map(|body| body.text().into_owned()).unwrap_or_default()
	}

	/// Deserializes the body as JSON.
	pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_slice(self.body.as_ref().map_or(&[][..], Body::as_bytes))
	}

	pub fn into_http(self) -> http::Response<Bytes> {
		let mut response = http::Response::new(self.body.map(Body::into_bytes).unwrap_or_default());
		*response.status_mut() = self.status;
		*response.headers_mut() = self.headers;
		response
	}
}

impl From<Response> for http::Response<Bytes> {
	fn from(response: Response) -> Self {
		response.into_http()
	}
}
