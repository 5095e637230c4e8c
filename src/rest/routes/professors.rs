// rest/routes/professors.rs — Professor routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::{parse_id, reject, to_payload};
use crate::records::{Professor, RecordError};
use crate::AppContext;

pub async fn list_professors(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Professor>> {
    Json(ctx.records.list_professors())
}

pub async fn create_professor(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Professor>), (StatusCode, Json<Value>)> {
    match ctx.records.create_professor(&to_payload(body)) {
        Ok(professor) => {
            info!(id = professor.id, name = %professor.name, "professor created");
            Ok((StatusCode::CREATED, Json(professor)))
        }
        Err(e) => Err(reject(e)),
    }
}

pub async fn get_professor(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Professor>, (StatusCode, Json<Value>)> {
    ctx.records
        .find_professor(parse_id(&id))
        .map(Json)
        .ok_or_else(|| reject(RecordError::NotFound("Professor")))
}
