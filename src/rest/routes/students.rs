// rest/routes/students.rs — Student routes, including the per-student
// relational views (subjects, tasks).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::{parse_id, reject, to_payload};
use crate::records::{RecordError, Student, Subject, Task};
use crate::AppContext;

pub async fn list_students(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Student>> {
    Json(ctx.records.list_students())
}

pub async fn create_student(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Student>), (StatusCode, Json<Value>)> {
    match ctx.records.create_student(&to_payload(body)) {
        Ok(student) => {
            info!(id = student.id, name = %student.name, "student created");
            Ok((StatusCode::CREATED, Json(student)))
        }
        Err(e) => Err(reject(e)),
    }
}

pub async fn get_student(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Student>, (StatusCode, Json<Value>)> {
    ctx.records
        .find_student(parse_id(&id))
        .map(Json)
        .ok_or_else(|| reject(RecordError::NotFound("Student")))
}

pub async fn student_subjects(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Subject>>, (StatusCode, Json<Value>)> {
    ctx.records
        .subjects_of_student(parse_id(&id))
        .map(Json)
        .map_err(reject)
}

pub async fn student_tasks(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Task>>, (StatusCode, Json<Value>)> {
    ctx.records
        .tasks_of_student(parse_id(&id))
        .map(Json)
        .map_err(reject)
}
