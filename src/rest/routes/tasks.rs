// rest/routes/tasks.rs — Task creation and submission.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use super::{parse_id, reject, to_payload};
use crate::records::Task;
use crate::AppContext;

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<Value>)> {
    match ctx.records.create_task(&to_payload(body)) {
        Ok(task) => {
            info!(
                id = task.id,
                student_id = task.student_id,
                subject_id = task.subject_id,
                due = %task.due_date,
                "task created"
            );
            Ok((StatusCode::CREATED, Json(task)))
        }
        Err(e) => Err(reject(e)),
    }
}

pub async fn submit_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match ctx.records.submit_task(parse_id(&id), &to_payload(body)) {
        Ok(task) => {
            info!(id = task.id, file = task.file.as_deref().unwrap_or(""), "task submitted");
            Ok(Json(json!({ "message": "Task submitted", "task": task })))
        }
        Err(e) => Err(reject(e)),
    }
}
