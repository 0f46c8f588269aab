use std::cell::Cell;
use std::collections::BTreeMap;

use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderMap, HeaderValue, StatusCode};
use http_assert::{
	ALLOWED, AUTHORIZED, BINDINGS, Body, ContractViolation, FOUND, INTERNAL_SERVER_ERROR, Interrupt, MATCH,
	NO_CONTENT, NOT_FOUND, OK, REDIRECT, Response, ResponseInit, SUCCESSFUL, TEMPORARY_FOUND, VALID,
	NO_BODY_CODES, lookup,
};
use http_assert_table::StatusTable;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn raised<T: std::fmt::Debug>(result: Result<T, Interrupt>) -> Response {
	match result {
		Err(Interrupt::Response(response)) => *response,
		other => panic!("expected a raised response, got {other:?}"),
	}
}

#[test]
fn ok_raises_on_truthy() {
	let response = raised(OK.check(true));
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(response.text(), "OK");
}

#[test]
fn ok_passes_on_falsy() {
	assert!(OK.check(false).is_ok());
	assert!(OK.check(()).is_ok());
}

#[test]
fn lazy_body_never_runs_when_passing() {
	let ran = Cell::new(false);
	let body = || {
		ran.set(true);
		"custom"
	};

	assert!(OK.check_with((), body, ()).is_ok());
	assert!(!ran.get());

	let response = raised(OK.check_with(1, body, ()));
	assert!(ran.get());
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(response.text(), "custom");
}

#[test]
fn found_narrows_option() {
	let document = FOUND.check(Some("draft")).unwrap();
	assert_eq!(document, "draft");

	let response = raised(FOUND.check(None::<&str>));
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(response.text(), "Not Found");

	assert!(NOT_FOUND.check(None::<&str>).is_ok());
	let response = raised(NOT_FOUND.check(Some("draft")));
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn no_content_forbids_body() {
	let response = raised(NO_CONTENT.check(true));
	assert_eq!(response.status(), StatusCode::NO_CONTENT);
	assert!(response.body().is_none());
	assert_eq!(response.text(), "");

	let response = raised(NO_CONTENT.check_with(true, "", ()));
	assert_eq!(response.text(), "");

	assert_eq!(
		NO_CONTENT.check_with(true, "x", ()).unwrap_err(),
		Interrupt::Violation(ContractViolation::BodyNotAllowed {
			status: StatusCode::NO_CONTENT
		})
	);
}

#[test]
fn json_body_with_content_type() {
	let mut headers = HeaderMap::new();
	headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
	let body = Body::json(&json!({ "error": "conflict" })).unwrap();

	let response = raised(MATCH.check_with(false, body, headers));
	assert_eq!(response.status(), StatusCode::CONFLICT);
	assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
	assert_eq!(response.json::<serde_json::Value>().unwrap(), json!({ "error": "conflict" }));
}

#[test]
fn redirect_carries_location() {
	let init = || ResponseInit::new().header(LOCATION, HeaderValue::from_static("/login"));
	let response = raised(REDIRECT.check_with(true, (), init));

	assert_eq!(response.status(), StatusCode::FOUND);
	assert_eq!(response.text(), "Found");

	let http = response.into_http();
	assert_eq!(http.headers()[LOCATION], "/login");
}

struct User {
	id: u32,
	admin: bool,
}

struct Document {
	owner: u32,
	revision: u32,
	text: String,
}

struct Store {
	documents: BTreeMap<u32, Document>,
	fail_writes: bool,
}

impl Store {
	fn write(&mut self, id: u32, text: String) -> Result<(), String> {
		if self.fail_writes {
			return Err("disk full".into());
		}
		if let Some(document) = self.documents.get_mut(&id) {
			document.text = text;
			document.revision += 1;
		}
		Ok(())
	}
}

struct Edit {
	id: u32,
	revision: u32,
	text: String,
}

fn save_and_continue(store: &mut Store, user: Option<&User>, edit: Edit) -> Result<(), Interrupt> {
	let user = AUTHORIZED.check(user)?;
	let valid = !edit.text.trim().is_empty();
	VALID.check_with(valid, "Document text must not be blank", ())?;

	let document = FOUND.check(store.documents.get(&edit.id))?;
	ALLOWED.check(user.admin || document.owner == user.id)?;
	MATCH.check_with(document.revision == edit.revision, "Document was edited elsewhere", ())?;

	if let Err(error) = store.write(edit.id, edit.text) {
		INTERNAL_SERVER_ERROR.check_with(true, format!("Saving failed: {error}"), ())?;
	}
	NO_CONTENT.check(true)
}

fn store() -> Store {
	let document = Document {
		owner: 1,
		revision: 3,
		text: "hello".into(),
	};
	Store {
		documents: BTreeMap::from([(10, document)]),
		fail_writes: false,
	}
}

fn edit(revision: u32, text: &str) -> Edit {
	Edit {
		id: 10,
		revision,
		text: text.into(),
	}
}

#[rstest]
#[case::anonymous(None, edit(3, "new"), 401, "Unauthorized")]
#[case::blank(Some(User { id: 1, admin: false }), edit(3, "  "), 400, "Document text must not be blank")]
#[case::missing(Some(User { id: 1, admin: false }), Edit { id: 99, revision: 3, text: "new".into() }, 404, "Not Found")]
#[case::stranger(Some(User { id: 2, admin: false }), edit(3, "new"), 403, "Forbidden")]
#[case::stale(Some(User { id: 1, admin: false }), edit(2, "new"), 409, "Document was edited elsewhere")]
#[case::admin(Some(User { id: 2, admin: true }), edit(3, "new"), 204, "")]
#[case::owner(Some(User { id: 1, admin: false }), edit(3, "new"), 204, "")]
fn save_and_continue_outcomes(
	#[case] user: Option<User>,
	#[case] edit: Edit,
	#[case] status: u16,
	#[case] text: &str,
) {
	let mut store = store();
	let response = raised(save_and_continue(&mut store, user.as_ref(), edit));
	assert_eq!(response.status().as_u16(), status);
	assert_eq!(response.text(), text);

	let saved = &store.documents[&10];
	if status == 204 {
		assert_eq!((saved.revision, saved.text.as_str()), (4, "new"));
	} else {
		assert_eq!((saved.revision, saved.text.as_str()), (3, "hello"));
	}
}

#[test]
fn save_and_continue_reports_storage_failure() {
	let mut store = Store {
		fail_writes: true,
		..store()
	};
	let user = User { id: 1, admin: false };
	let response = raised(save_and_continue(&mut store, Some(&user), edit(3, "new")));
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(response.text(), "Saving failed: disk full");
}

#[test]
fn aliases_are_the_same_static() {
	assert!(std::ptr::eq(&OK, &SUCCESSFUL));
	assert!(std::ptr::eq(&REDIRECT, &TEMPORARY_FOUND));
	assert!(std::ptr::eq(FOUND.positive(), &NOT_FOUND));
}

#[test]
fn every_entry_raises_its_code() {
	let table = StatusTable::builtin().unwrap();

	for row in table.rows() {
		let positive = lookup(row.name()).unwrap();
		let negated = lookup(row.negation()).unwrap();
		assert!(!positive.is_negated() && negated.is_negated());

		let response = raised(positive.check(true));
		assert_eq!(response.status().as_u16(), row.code());
		assert_eq!(response.body().map(|body| body.text().into_owned()), row.default_body().map(str::to_owned));
		assert!(positive.check(false).is_ok());

		let response = raised(negated.check(false));
		assert_eq!(response.status().as_u16(), row.code());
		assert!(negated.check(true).is_ok());

		if row.no_body {
			assert!(positive.check_with(true, "body", ()).unwrap_err().is_violation());
			assert!(positive.check_with(true, "", ()).unwrap_err().as_response().is_some());
		} else {
			assert_eq!(raised(positive.check_with(true, "override", ())).text(), "override");
			assert_eq!(raised(positive.check_with(true, || "lazy", ())).text(), "lazy");
		}
	}
}

#[test]
fn registry_matches_table() {
	let table = StatusTable::builtin().unwrap();

	let expected: Vec<(&str, u16, bool)> = table
		.rows()
		.flat_map(|row| {
			let code = row.code();
			let positive = row.entry.names.iter().map(move |name| (name.as_str(), code, false));
			let negated = row.entry.negations.iter().map(move |name| (name.as_str(), code, true));
			positive.chain(negated)
		})
		.collect();
	let actual: Vec<(&str, u16, bool)> = BINDINGS
		.iter()
		.map(|(name, binding)| (*name, binding.code(), binding.is_negated()))
		.collect();

	assert_eq!(actual, expected);
	assert_eq!(NO_BODY_CODES, table.no_body_codes().collect::<Vec<_>>().as_slice());
	assert!(lookup("no_such_status").is_none());
}
