use crate::server::{ServerRouter, json::Json};
use axum::{Router, extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use colordorm_db::client::DbClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub fn routes() -> ServerRouter {
    Router::new().typed_get(index).typed_get(health_check)
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/")]
struct IndexPath;

async fn index(
    IndexPath: IndexPath,
    State(db): State<Arc<DbClient>>,
) -> (StatusCode, Json<MessageResponse>) {
    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Color Dorm API",
            }),
        ),
        Err(err) => {
            warn!(error = %err, "Document store ping failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: "Failed to connect to the database",
                }),
            )
        }
    }
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/health")]
struct HealthPath;

async fn health_check(HealthPath: HealthPath) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Server is running",
    })
}
