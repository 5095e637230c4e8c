// SPDX-License-Identifier: MIT
// Creation-time integrity checks.
//
// Every create runs two gates, in order, failing at the first violation:
//   1. required-field check — first missing field only, in declared order
//   2. reference check — every foreign key must resolve to a live record
//
// Both gates run only at creation time. Records are immutable afterwards
// (task submission aside), so there is no re-validation path.

use serde_json::{Map, Value};

use super::error::RecordError;
use super::model::EntityId;
use super::store::Collections;

/// Payload shape shared by all create operations: a JSON object keyed by
/// wire field names.
pub type Payload = Map<String, Value>;

/// Tag identifying which collection an operation targets. Carries the
/// kind-specific required-field list and display label, so creation is one
/// polymorphic flow instead of five copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Professor,
    Student,
    Subject,
    Enrollment,
    Task,
}

impl EntityKind {
    /// Required fields in the order they are checked (and reported).
    pub const fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::Professor | Self::Student => &["name", "email"],
            Self::Subject => &["name", "professorId"],
            Self::Enrollment => &["studentId", "subjectId"],
            Self::Task => &["title", "description", "dueDate", "studentId", "subjectId"],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Professor => "Professor",
            Self::Student => "Student",
            Self::Subject => "Subject",
            Self::Enrollment => "Enrollment",
            Self::Task => "Task",
        }
    }
}

/// Reject the first required field that is absent or empty.
pub fn check_required(kind: EntityKind, payload: &Payload) -> Result<(), RecordError> {
    for field in kind.required_fields() {
        if !is_present(payload.get(*field)) {
            return Err(RecordError::MissingField(field));
        }
    }
    Ok(())
}

/// Field presence. Null, empty strings, zero, and `false` all count as
/// missing: ids are positive and required text fields must be non-empty.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Normalize an id field to canonical numeric form.
///
/// Clients send ids as JSON numbers or as numeric strings; both map to the
/// same `EntityId` here, so downstream comparisons (duplicate-enrollment
/// detection included) never depend on the wire representation.
pub fn id_field(payload: &Payload, field: &str) -> Option<EntityId> {
    match payload.get(field) {
        Some(Value::Number(n)) => n.as_u64().filter(|id| *id > 0),
        Some(Value::String(s)) => s.trim().parse::<EntityId>().ok().filter(|id| *id > 0),
        _ => None,
    }
}

/// Extract a text field. Call only after `check_required` has passed.
pub fn text_field(payload: &Payload, field: &str) -> String {
    payload
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Resolve an id field against its target collection: `Some(id)` iff the
/// field parses to a positive id AND a record with that id exists.
pub(crate) fn resolve_id(
    data: &Collections,
    target: EntityKind,
    payload: &Payload,
    field: &str,
) -> Option<EntityId> {
    id_field(payload, field).filter(|id| data.exists(target, *id))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
