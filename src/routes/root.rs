use crate::{errors::AppError, state::AppState};
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

pub async fn index() -> Result<Json<&'static str>, AppError> {
    Ok(Json("foh staffing api index page"))
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "empty page")
}
