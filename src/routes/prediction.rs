use crate::errors::AppError;
use crate::repositories::{records, settings};
use crate::services::predictor::predict_day;
use crate::state::AppState;
use crate::structs::prediction::{
    DailyPrediction, PredictionParams, DEFAULT_DINNER_BOOKINGS, DEFAULT_LUNCH_BOOKINGS,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppState> {
    Router::new().route("/", get(get_prediction))
}

/// 沒給的參數用儀表板設定：目標日期、AI 指數
pub async fn get_prediction(
    State(state): State<AppState>,
    Query(params): Query<PredictionParams>,
) -> Result<Json<DailyPrediction>, AppError> {
    let current = settings::get_settings(&state).await;

    let multiplier = match params.multiplier {
        Some(multiplier) => settings::validate_multiplier(multiplier)?,
        None => current.footfall_multiplier,
    };
    let target_date = params.target_date.unwrap_or(current.target_date);

    let history = records::snapshot(&state).await;
    let prediction = predict_day(
        &history,
        &target_date,
        params.lunch_bookings.unwrap_or(DEFAULT_LUNCH_BOOKINGS),
        params.dinner_bookings.unwrap_or(DEFAULT_DINNER_BOOKINGS),
        multiplier,
    );

    settings::set_total_daily_covers(&state, prediction.total_covers).await;

    Ok(Json(prediction))
}
