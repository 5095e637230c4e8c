use axum::http::StatusCode;
use thiserror::Error;

/// Every way a record operation can fail.
///
/// Display strings double as the wire-level `error` message, so they are
/// phrased for the client, not for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field was absent or empty. Only the first missing field
    /// of an operation is ever reported.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A foreign key did not resolve to an existing record.
    #[error("{0} does not exist")]
    UnknownReference(&'static str),

    /// The (student, subject) pair is already enrolled.
    #[error("Already enrolled")]
    AlreadyEnrolled,

    /// An id lookup missed.
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl RecordError {
    /// HTTP status for this error. Lookup misses are 404, everything else
    /// is a client mistake at creation time.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingField(_) | Self::UnknownReference(_) | Self::AlreadyEnrolled => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(
            RecordError::MissingField("email").to_string(),
            "Missing field: email"
        );
        assert_eq!(
            RecordError::UnknownReference("Professor").to_string(),
            "Professor does not exist"
        );
        assert_eq!(RecordError::AlreadyEnrolled.to_string(), "Already enrolled");
        assert_eq!(RecordError::NotFound("Task").to_string(), "Task not found");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            RecordError::MissingField("name").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RecordError::UnknownReference("Student or subject").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RecordError::AlreadyEnrolled.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RecordError::NotFound("Student").status(), StatusCode::NOT_FOUND);
    }
}
