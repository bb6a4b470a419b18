use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use sea_orm::DatabaseConnection;

use crate::state::AppState;

pub fn create_route() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[utoipa::path(
    get,
    tag = "health",
    path = "/health",
    responses(
      (status = 200, description = "Health check successful"),
      (status = 500, description = "Health check failed")
    )
)]
pub async fn health_check(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match db.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable")
        }
    }
}
