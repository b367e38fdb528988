use crate::errors::AppError;
use crate::repositories::settings;
use crate::services::advisor::{build_prompt, to_recommendation};
use crate::state::AppState;
use crate::structs::advisor::{AIRecommendation, AdvisorRequest};
use axum::{extract::State, routing::post, Json, Router};

pub fn new() -> Router<AppState> {
    Router::new().route("/", post(consult))
}

/// 問 AI 當天的天氣、交通、活動，取得 footfall 指數
pub async fn consult(
    State(state): State<AppState>,
    Json(payload): Json<AdvisorRequest>,
) -> Result<Json<AIRecommendation>, AppError> {
    let current = settings::get_settings(&state).await;

    let location = payload.location.unwrap_or(current.location);
    if location.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Please specify venue location for grounding.".to_string(),
        ));
    }
    let target_date = payload.target_date.unwrap_or(current.target_date);
    let bookings = payload.bookings.unwrap_or(current.total_daily_covers);

    tracing::info!(
        "advisor consult for {} on {} with {} bookings",
        location,
        target_date,
        bookings
    );

    let reply = state
        .advisor
        .generate(build_prompt(location.trim(), &target_date, bookings))
        .await?;
    let recommendation = to_recommendation(reply)?;

    settings::set_footfall_multiplier(&state, recommendation.footfall_index).await;

    Ok(Json(recommendation))
}
