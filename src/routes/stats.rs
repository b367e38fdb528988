use crate::errors::AppError;
use crate::repositories::{records, settings};
use crate::services::stats::{chart_series, overview};
use crate::state::AppState;
use crate::structs::stats::{ChartParams, ChartSeries, StatsOverview};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_overview))
        .route("/charts", get(get_charts))
}

pub async fn get_overview(State(state): State<AppState>) -> Result<Json<StatsOverview>, AppError> {
    Ok(Json(overview(&records::snapshot(&state).await)))
}

pub async fn get_charts(
    State(state): State<AppState>,
    Query(params): Query<ChartParams>,
) -> Result<Json<ChartSeries>, AppError> {
    let target_date = match params.target_date {
        Some(target_date) => target_date,
        None => settings::get_settings(&state).await.target_date,
    };

    Ok(Json(chart_series(
        &records::snapshot(&state).await,
        &target_date,
    )))
}
