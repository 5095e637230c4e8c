// rest/routes/subjects.rs — Subject routes and the subject roster view.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::{parse_id, reject, to_payload};
use crate::records::{RecordError, Student, Subject};
use crate::AppContext;

pub async fn list_subjects(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Subject>> {
    Json(ctx.records.list_subjects())
}

pub async fn create_subject(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Subject>), (StatusCode, Json<Value>)> {
    match ctx.records.create_subject(&to_payload(body)) {
        Ok(subject) => {
            info!(
                id = subject.id,
                name = %subject.name,
                professor_id = subject.professor_id,
                "subject created"
            );
            Ok((StatusCode::CREATED, Json(subject)))
        }
        Err(e) => Err(reject(e)),
    }
}

pub async fn get_subject(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Subject>, (StatusCode, Json<Value>)> {
    ctx.records
        .find_subject(parse_id(&id))
        .map(Json)
        .ok_or_else(|| reject(RecordError::NotFound("Subject")))
}

pub async fn subject_students(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Student>>, (StatusCode, Json<Value>)> {
    ctx.records
        .students_of_subject(parse_id(&id))
        .map(Json)
        .map_err(reject)
}
