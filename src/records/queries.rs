// SPDX-License-Identifier: MIT
// Cross-entity queries. Read-only joins over the relational collections.
//
// All three require the root entity to exist and preserve the relational
// collection's insertion order. Rows whose target fails to resolve are
// dropped (cannot happen while creation-time integrity holds).

use super::error::RecordError;
use super::model::{EntityId, Student, Subject, Task};
use super::store::RecordStore;
use super::validate::EntityKind;

impl RecordStore {
    /// Every student enrolled in the given subject.
    pub fn students_of_subject(&self, subject_id: EntityId) -> Result<Vec<Student>, RecordError> {
        let data = self.inner.read().unwrap();
        if !data.exists(EntityKind::Subject, subject_id) {
            return Err(RecordError::NotFound(EntityKind::Subject.label()));
        }
        Ok(data
            .enrollments
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .filter_map(|e| data.students.iter().find(|s| s.id == e.student_id))
            .cloned()
            .collect())
    }

    /// Every subject the given student is enrolled in.
    pub fn subjects_of_student(&self, student_id: EntityId) -> Result<Vec<Subject>, RecordError> {
        let data = self.inner.read().unwrap();
        if !data.exists(EntityKind::Student, student_id) {
            return Err(RecordError::NotFound(EntityKind::Student.label()));
        }
        Ok(data
            .enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .filter_map(|e| data.subjects.iter().find(|s| s.id == e.subject_id))
            .cloned()
            .collect())
    }

    /// Every task assigned to the given student, pending or submitted.
    pub fn tasks_of_student(&self, student_id: EntityId) -> Result<Vec<Task>, RecordError> {
        let data = self.inner.read().unwrap();
        if !data.exists(EntityKind::Student, student_id) {
            return Err(RecordError::NotFound(EntityKind::Student.label()));
        }
        Ok(data
            .tasks
            .iter()
            .filter(|t| t.student_id == student_id)
            .cloned()
            .collect())
    }
}
