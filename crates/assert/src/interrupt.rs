use http::StatusCode;
use thiserror::Error;

use crate::Response;

/// Misuse of an assertion. Never converted into a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
	#[error("status {status} does not allow a response body")]
	BodyNotAllowed { status: StatusCode },
	#[error("{code} is not a valid HTTP status code")]
	InvalidStatus { code: u16 },
}

/// What a raising assertion returns through `Err`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Interrupt {
	#[error("raised {}", .0.status())]
	Response(Box<Response>),
	#[error(transparent)]
	Violation(#[from] ContractViolation),
}

impl Interrupt {
	pub fn as_response(&self) -> Option<&Response> {
		match self {
			Self::Response(response) => Some(response),
			Self::Violation(_) => None,
		}
	}

	/// Unwraps the raised response, handing violations back as errors.
	pub fn into_response(self) -> Result<Response, ContractViolation> {
		match self {
			Self::Response(response) => Ok(*response),
			Self::Violation(violation) => Err(violation),
		}
	}

	pub fn is_violation(&self) -> bool {
		matches!(self, Self::Violation(_))
	}
}

impl From<Response> for Interrupt {
	fn from(response: Response) -> Self {
		Self::Response(Box::new(response))
	}
}
