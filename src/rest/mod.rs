// rest/mod.rs — HTTP boundary for the records engine.
//
// Axum server, local only by default. Routes map one-to-one onto engine
// operations; every handler deserializes the request, calls the store, and
// serializes the result or a `{"error": ...}` body.
//
// Endpoints:
//   GET|POST /professors            GET /professors/{id}
//   GET|POST /students              GET /students/{id}
//   GET      /students/{id}/subjects
//   GET      /students/{id}/tasks
//   GET|POST /subjects              GET /subjects/{id}
//   GET      /subjects/{id}/students
//   POST     /enrollments
//   POST     /tasks                 PUT /tasks/{id}/submit
//   GET      /status
//   GET      /health

pub mod routes;

use anyhow::Result;
use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::AppContext;

pub async fn start_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Service surface (no entity semantics)
        .route("/health", get(routes::health::health))
        .route("/status", get(routes::status::status))
        // Professors
        .route(
            "/professors",
            get(routes::professors::list_professors).post(routes::professors::create_professor),
        )
        .route("/professors/{id}", get(routes::professors::get_professor))
        // Students
        .route(
            "/students",
            get(routes::students::list_students).post(routes::students::create_student),
        )
        .route("/students/{id}", get(routes::students::get_student))
        .route(
            "/students/{id}/subjects",
            get(routes::students::student_subjects),
        )
        .route("/students/{id}/tasks", get(routes::students::student_tasks))
        // Subjects
        .route(
            "/subjects",
            get(routes::subjects::list_subjects).post(routes::subjects::create_subject),
        )
        .route("/subjects/{id}", get(routes::subjects::get_subject))
        .route(
            "/subjects/{id}/students",
            get(routes::subjects::subject_students),
        )
        // Enrollments
        .route("/enrollments", post(routes::enrollments::create_enrollment))
        // Tasks
        .route("/tasks", post(routes::tasks::create_task))
        .route("/tasks/{id}/submit", put(routes::tasks::submit_task))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Catch-all for unmatched routes.
async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
