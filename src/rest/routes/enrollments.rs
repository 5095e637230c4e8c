// rest/routes/enrollments.rs — Enrollment creation.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::{reject, to_payload};
use crate::records::Enrollment;
use crate::AppContext;

pub async fn create_enrollment(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Enrollment>), (StatusCode, Json<Value>)> {
    match ctx.records.create_enrollment(&to_payload(body)) {
        Ok(enrollment) => {
            info!(
                id = enrollment.id,
                student_id = enrollment.student_id,
                subject_id = enrollment.subject_id,
                "enrollment created"
            );
            Ok((StatusCode::CREATED, Json(enrollment)))
        }
        Err(e) => Err(reject(e)),
    }
}
