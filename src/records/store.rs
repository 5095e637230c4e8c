// SPDX-License-Identifier: MIT
//! The record registry — five append-only, insertion-ordered collections
//! behind a single writer lock.
//!
//! Each mutating operation runs validate → check → append as one atomic
//! step under the write lock; `id = len + 1` and enrollment uniqueness
//! depend on that atomicity. Nothing here touches disk or network; state
//! lives and dies with the process.

use std::sync::RwLock;

use chrono::Utc;

use super::error::RecordError;
use super::model::{EntityId, Enrollment, Professor, StatusSnapshot, Student, Subject, Task};
use super::validate::{self, EntityKind, Payload};

/// The raw collections. Only ever touched through `RecordStore`'s lock.
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub(crate) professors: Vec<Professor>,
    pub(crate) students: Vec<Student>,
    pub(crate) subjects: Vec<Subject>,
    pub(crate) enrollments: Vec<Enrollment>,
    pub(crate) tasks: Vec<Task>,
}

impl Collections {
    /// True iff a record with this id exists in the kind's collection.
    pub(crate) fn exists(&self, kind: EntityKind, id: EntityId) -> bool {
        match kind {
            EntityKind::Professor => self.professors.iter().any(|p| p.id == id),
            EntityKind::Student => self.students.iter().any(|s| s.id == id),
            EntityKind::Subject => self.subjects.iter().any(|s| s.id == id),
            EntityKind::Enrollment => self.enrollments.iter().any(|e| e.id == id),
            EntityKind::Task => self.tasks.iter().any(|t| t.id == id),
        }
    }
}

/// In-memory registry of professors, students, subjects, enrollments, and
/// tasks. Owned by `AppContext` and shared across all handlers.
#[derive(Debug, Default)]
pub struct RecordStore {
    pub(crate) inner: RwLock<Collections>,
}

impl RecordStore {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry pre-loaded with the bootstrap records the service
    /// starts with: two professors, two students, two subjects, and one
    /// enrollment per student.
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        {
            let mut data = store.inner.write().unwrap();
            data.professors = vec![
                Professor {
                    id: 1,
                    name: "Juan Pérez".to_string(),
                    email: "juan@mail.com".to_string(),
                },
                Professor {
                    id: 2,
                    name: "Sebastián Díaz".to_string(),
                    email: "seba@mail.com".to_string(),
                },
            ];
            data.students = vec![
                Student {
                    id: 1,
                    name: "Pedro Gómez".to_string(),
                    email: "pedro@mail.com".to_string(),
                },
                Student {
                    id: 2,
                    name: "Roberto Riberos".to_string(),
                    email: "rober@mail.com".to_string(),
                },
            ];
            data.subjects = vec![
                Subject {
                    id: 1,
                    name: "Matemática".to_string(),
                    professor_id: 1,
                },
                Subject {
                    id: 2,
                    name: "Lengua".to_string(),
                    professor_id: 2,
                },
            ];
            data.enrollments = vec![
                Enrollment {
                    id: 1,
                    student_id: 1,
                    subject_id: 1,
                },
                Enrollment {
                    id: 2,
                    student_id: 2,
                    subject_id: 2,
                },
            ];
        }
        store
    }

    // ─── Listing and lookup ──────────────────────────────────────────────────

    pub fn list_professors(&self) -> Vec<Professor> {
        self.inner.read().unwrap().professors.clone()
    }

    pub fn list_students(&self) -> Vec<Student> {
        self.inner.read().unwrap().students.clone()
    }

    pub fn list_subjects(&self) -> Vec<Subject> {
        self.inner.read().unwrap().subjects.clone()
    }

    pub fn find_professor(&self, id: EntityId) -> Option<Professor> {
        let data = self.inner.read().unwrap();
        data.professors.iter().find(|p| p.id == id).cloned()
    }

    pub fn find_student(&self, id: EntityId) -> Option<Student> {
        let data = self.inner.read().unwrap();
        data.students.iter().find(|s| s.id == id).cloned()
    }

    pub fn find_subject(&self, id: EntityId) -> Option<Subject> {
        let data = self.inner.read().unwrap();
        data.subjects.iter().find(|s| s.id == id).cloned()
    }

    // ─── Creation ────────────────────────────────────────────────────────────

    pub fn create_professor(&self, payload: &Payload) -> Result<Professor, RecordError> {
        validate::check_required(EntityKind::Professor, payload)?;
        let mut data = self.inner.write().unwrap();
        let professor = Professor {
            id: data.professors.len() as EntityId + 1,
            name: validate::text_field(payload, "name"),
            email: validate::text_field(payload, "email"),
        };
        data.professors.push(professor.clone());
        Ok(professor)
    }

    pub fn create_student(&self, payload: &Payload) -> Result<Student, RecordError> {
        validate::check_required(EntityKind::Student, payload)?;
        let mut data = self.inner.write().unwrap();
        let student = Student {
            id: data.students.len() as EntityId + 1,
            name: validate::text_field(payload, "name"),
            email: validate::text_field(payload, "email"),
        };
        data.students.push(student.clone());
        Ok(student)
    }

    pub fn create_subject(&self, payload: &Payload) -> Result<Subject, RecordError> {
        validate::check_required(EntityKind::Subject, payload)?;
        let mut data = self.inner.write().unwrap();
        let professor_id =
            validate::resolve_id(&data, EntityKind::Professor, payload, "professorId")
                .ok_or(RecordError::UnknownReference(EntityKind::Professor.label()))?;
        let subject = Subject {
            id: data.subjects.len() as EntityId + 1,
            name: validate::text_field(payload, "name"),
            professor_id,
        };
        data.subjects.push(subject.clone());
        Ok(subject)
    }

    /// Enroll a student in a subject. Rejects a duplicate (student, subject)
    /// pair before anything is appended.
    pub fn create_enrollment(&self, payload: &Payload) -> Result<Enrollment, RecordError> {
        validate::check_required(EntityKind::Enrollment, payload)?;
        let mut data = self.inner.write().unwrap();
        let student_id = validate::resolve_id(&data, EntityKind::Student, payload, "studentId");
        let subject_id = validate::resolve_id(&data, EntityKind::Subject, payload, "subjectId");
        let (Some(student_id), Some(subject_id)) = (student_id, subject_id) else {
            return Err(RecordError::UnknownReference("Student or subject"));
        };

        let duplicate = data
            .enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.subject_id == subject_id);
        if duplicate {
            return Err(RecordError::AlreadyEnrolled);
        }

        let enrollment = Enrollment {
            id: data.enrollments.len() as EntityId + 1,
            student_id,
            subject_id,
        };
        data.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    /// Create a task in its pending state: not submitted, no file, no grade.
    pub fn create_task(&self, payload: &Payload) -> Result<Task, RecordError> {
        validate::check_required(EntityKind::Task, payload)?;
        let mut data = self.inner.write().unwrap();
        let student_id = validate::resolve_id(&data, EntityKind::Student, payload, "studentId");
        let subject_id = validate::resolve_id(&data, EntityKind::Subject, payload, "subjectId");
        let (Some(student_id), Some(subject_id)) = (student_id, subject_id) else {
            return Err(RecordError::UnknownReference("Student or subject"));
        };

        let task = Task {
            id: data.tasks.len() as EntityId + 1,
            title: validate::text_field(payload, "title"),
            description: validate::text_field(payload, "description"),
            due_date: validate::text_field(payload, "dueDate"),
            student_id,
            subject_id,
            submitted: false,
            file: None,
            grade: None,
            submitted_date: None,
        };
        data.tasks.push(task.clone());
        Ok(task)
    }

    // ─── Task lifecycle ──────────────────────────────────────────────────────

    /// Submit a task: store the file reference, flip `submitted`, stamp the
    /// submission time. The stored record is mutated in place.
    ///
    /// Re-submitting an already-submitted task is allowed and overwrites
    /// the file and timestamp.
    pub fn submit_task(&self, id: EntityId, payload: &Payload) -> Result<Task, RecordError> {
        let mut data = self.inner.write().unwrap();
        let task = data
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RecordError::NotFound(EntityKind::Task.label()))?;

        let file = payload
            .get("file")
            .and_then(serde_json::Value::as_str)
            .filter(|f| !f.is_empty())
            .ok_or(RecordError::MissingField("file"))?;

        task.submitted = true;
        task.file = Some(file.to_string());
        task.submitted_date = Some(Utc::now().to_rfc3339());
        Ok(task.clone())
    }

    // ─── Status ──────────────────────────────────────────────────────────────

    /// Collection sizes plus how many tasks have been submitted.
    pub fn snapshot(&self) -> StatusSnapshot {
        let data = self.inner.read().unwrap();
        StatusSnapshot {
            professors: data.professors.len(),
            students: data.students.len(),
            subjects: data.subjects.len(),
            enrollments: data.enrollments.len(),
            tasks: data.tasks.len(),
            tasks_submitted: data.tasks.iter().filter(|t| t.submitted).count(),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn ids_are_sequential_per_collection() {
        let store = RecordStore::with_seed_data();
        let professor = store
            .create_professor(&payload(json!({ "name": "Ana", "email": "ana@mail.com" })))
            .unwrap();
        assert_eq!(professor.id, 3);

        let subject = store
            .create_subject(&payload(json!({ "name": "Historia", "professorId": 1 })))
            .unwrap();
        assert_eq!(subject.id, 3);

        // Other collections are unaffected by professor/subject creation.
        assert_eq!(store.snapshot().students, 2);
    }

    #[test]
    fn subject_with_unknown_professor_is_rejected_without_mutation() {
        let store = RecordStore::with_seed_data();
        let err = store
            .create_subject(&payload(json!({ "name": "Física", "professorId": 99 })))
            .unwrap_err();
        assert_eq!(err, RecordError::UnknownReference("Professor"));
        assert_eq!(store.snapshot().subjects, 2);
    }

    #[test]
    fn missing_fields_report_the_first_gap_only() {
        let store = RecordStore::with_seed_data();
        let err = store.create_professor(&payload(json!({}))).unwrap_err();
        assert_eq!(err, RecordError::MissingField("name"));

        let err = store
            .create_professor(&payload(json!({ "name": "Ana" })))
            .unwrap_err();
        assert_eq!(err, RecordError::MissingField("email"));
        assert_eq!(store.snapshot().professors, 2);
    }

    #[test]
    fn duplicate_enrollment_is_rejected() {
        let store = RecordStore::with_seed_data();
        let err = store
            .create_enrollment(&payload(json!({ "studentId": 1, "subjectId": 1 })))
            .unwrap_err();
        assert_eq!(err, RecordError::AlreadyEnrolled);
        assert_eq!(store.snapshot().enrollments, 2);
    }

    #[test]
    fn duplicate_detection_ignores_id_representation() {
        let store = RecordStore::with_seed_data();
        store
            .create_enrollment(&payload(json!({ "studentId": 1, "subjectId": 2 })))
            .unwrap();
        // Same pair again, ids as strings this time.
        let err = store
            .create_enrollment(&payload(json!({ "studentId": "1", "subjectId": "2" })))
            .unwrap_err();
        assert_eq!(err, RecordError::AlreadyEnrolled);
    }

    #[test]
    fn enrollment_with_unknown_references_is_rejected() {
        let store = RecordStore::with_seed_data();
        let err = store
            .create_enrollment(&payload(json!({ "studentId": 99, "subjectId": 1 })))
            .unwrap_err();
        assert_eq!(err, RecordError::UnknownReference("Student or subject"));
    }

    #[test]
    fn task_starts_pending() {
        let store = RecordStore::with_seed_data();
        let task = store
            .create_task(&payload(json!({
                "title": "TP1",
                "description": "Ejercicios 1-10",
                "dueDate": "2026-09-01",
                "studentId": 1,
                "subjectId": 1,
            })))
            .unwrap();
        assert_eq!(task.id, 1);
        assert!(!task.submitted);
        assert_eq!(task.file, None);
        assert_eq!(task.grade, None);
        assert_eq!(task.submitted_date, None);
    }

    #[test]
    fn submit_requires_a_file_and_leaves_the_task_pending_without_one() {
        let store = RecordStore::with_seed_data();
        store
            .create_task(&payload(json!({
                "title": "TP1",
                "description": "Ejercicios",
                "dueDate": "2026-09-01",
                "studentId": 1,
                "subjectId": 1,
            })))
            .unwrap();

        let err = store.submit_task(1, &payload(json!({}))).unwrap_err();
        assert_eq!(err, RecordError::MissingField("file"));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.tasks, 1);
        assert_eq!(snapshot.tasks_submitted, 0);
    }

    #[test]
    fn submit_unknown_task_is_not_found() {
        let store = RecordStore::with_seed_data();
        let err = store
            .submit_task(42, &payload(json!({ "file": "homework.pdf" })))
            .unwrap_err();
        assert_eq!(err, RecordError::NotFound("Task"));
    }

    #[test]
    fn submit_sets_file_and_date_and_resubmit_overwrites_them() {
        let store = RecordStore::with_seed_data();
        store
            .create_task(&payload(json!({
                "title": "TP1",
                "description": "Ejercicios",
                "dueDate": "2026-09-01",
                "studentId": 1,
                "subjectId": 1,
            })))
            .unwrap();

        let task = store
            .submit_task(1, &payload(json!({ "file": "homework.pdf" })))
            .unwrap();
        assert!(task.submitted);
        assert_eq!(task.file.as_deref(), Some("homework.pdf"));
        assert!(task.submitted_date.is_some());

        // A second submission is not an error — it replaces the file.
        let task = store
            .submit_task(1, &payload(json!({ "file": "homework-v2.pdf" })))
            .unwrap();
        assert!(task.submitted);
        assert_eq!(task.file.as_deref(), Some("homework-v2.pdf"));
        assert_eq!(store.snapshot().tasks_submitted, 1);
    }

    #[test]
    fn snapshot_counts_the_seed_data() {
        let snapshot = RecordStore::with_seed_data().snapshot();
        assert_eq!(snapshot.professors, 2);
        assert_eq!(snapshot.students, 2);
        assert_eq!(snapshot.subjects, 2);
        assert_eq!(snapshot.enrollments, 2);
        assert_eq!(snapshot.tasks, 0);
        assert_eq!(snapshot.tasks_submitted, 0);
    }

    #[test]
    fn empty_store_starts_ids_at_one() {
        let store = RecordStore::new();
        let professor = store
            .create_professor(&payload(json!({ "name": "Eva", "email": "eva@mail.com" })))
            .unwrap();
        assert_eq!(professor.id, 1);
    }
}
