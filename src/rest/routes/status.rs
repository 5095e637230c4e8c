// rest/routes/status.rs — collection counts snapshot.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::records::StatusSnapshot;
use crate::AppContext;

pub async fn status(State(ctx): State<Arc<AppContext>>) -> Json<StatusSnapshot> {
    Json(ctx.records.snapshot())
}
