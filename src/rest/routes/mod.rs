pub mod enrollments;
pub mod health;
pub mod professors;
pub mod status;
pub mod students;
pub mod subjects;
pub mod tasks;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::records::{EntityId, RecordError};
use crate::records::validate::Payload;

/// Map an engine error to its HTTP response tuple.
pub(crate) fn reject(err: RecordError) -> (StatusCode, Json<Value>) {
    (err.status(), Json(json!({ "error": err.to_string() })))
}

/// Parse a path id. Zero is never assigned to a record, so a garbled id
/// simply falls through to the not-found path.
pub(crate) fn parse_id(raw: &str) -> EntityId {
    raw.trim().parse().unwrap_or(0)
}

/// Treat the request body as a field map; anything that is not a JSON
/// object validates as an empty one (first required field missing).
pub(crate) fn to_payload(body: Value) -> Payload {
    body.as_object().cloned().unwrap_or_default()
}
