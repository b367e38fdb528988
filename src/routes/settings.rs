use crate::errors::AppError;
use crate::repositories::settings;
use crate::state::AppState;
use crate::structs::settings::{DashboardSettings, SettingsUpdate};
use axum::{extract::State, routing::get, Json, Router};

pub fn new() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<DashboardSettings>, AppError> {
    Ok(Json(settings::get_settings(&state).await))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<SettingsUpdate>,
) -> Result<Json<DashboardSettings>, AppError> {
    Ok(Json(settings::update_settings(&state, payload).await?))
}
