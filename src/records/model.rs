// SPDX-License-Identifier: MIT
// Entity types for the academic records registry.

use serde::{Deserialize, Serialize};

/// Record identifier. Assigned sequentially per collection (`len + 1`).
/// Collections are append-only and ids are never reused.
pub type EntityId = u64;

/// A course professor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

/// An enrolled student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

/// A subject taught by exactly one professor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: EntityId,
    pub name: String,
    /// Must reference an existing professor at creation time.
    pub professor_id: EntityId,
}

/// The many-to-many link between a student and a subject.
///
/// The (student, subject) pair is unique across the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EntityId,
    pub student_id: EntityId,
    pub subject_id: EntityId,
}

/// An assignment handed to one student in one subject.
///
/// Starts pending (`submitted == false`, no file, no grade). Submission flips
/// `submitted`, stores the file reference, and stamps `submitted_date`.
/// Re-submitting is allowed and simply overwrites file and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub student_id: EntityId,
    pub subject_id: EntityId,
    pub submitted: bool,
    pub file: Option<String>,
    pub grade: Option<f64>,
    /// RFC 3339 submission timestamp. Absent until the task is submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<String>,
}

/// Collection sizes plus the submitted-task count. Pure read, never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub professors: usize,
    pub students: usize,
    pub subjects: usize,
    pub enrollments: usize,
    pub tasks: usize,
    pub tasks_submitted: usize,
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_serializes_camel_case() {
        let subject = Subject {
            id: 1,
            name: "Matemática".to_string(),
            professor_id: 1,
        };
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["professorId"], 1);
        assert!(json.get("professor_id").is_none());
    }

    #[test]
    fn pending_task_has_null_file_and_no_submitted_date() {
        let task = Task {
            id: 1,
            title: "TP1".to_string(),
            description: "Ejercicios 1-10".to_string(),
            due_date: "2026-09-01".to_string(),
            student_id: 1,
            subject_id: 1,
            submitted: false,
            file: None,
            grade: None,
            submitted_date: None,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["submitted"], false);
        assert!(json["file"].is_null());
        assert!(json["grade"].is_null());
        // Absent entirely, not null: the field only appears after submission.
        assert!(json.get("submittedDate").is_none());
    }

    #[test]
    fn submitted_task_carries_file_and_date() {
        let task = Task {
            id: 2,
            title: "TP2".to_string(),
            description: "Lectura".to_string(),
            due_date: "2026-10-01".to_string(),
            student_id: 2,
            subject_id: 2,
            submitted: true,
            file: Some("homework.pdf".to_string()),
            grade: None,
            submitted_date: Some("2026-08-06T00:00:00Z".to_string()),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["file"], "homework.pdf");
        assert_eq!(json["submittedDate"], "2026-08-06T00:00:00Z");
    }

    #[test]
    fn enrollment_roundtrip_json() {
        let enrollment = Enrollment {
            id: 1,
            student_id: 1,
            subject_id: 1,
        };
        let json = serde_json::to_string(&enrollment).unwrap();
        let back: Enrollment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.student_id, 1);
        assert_eq!(back.subject_id, 1);
    }
}
