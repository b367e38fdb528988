use crate::errors::AppError;
use crate::repositories::records;
use crate::state::AppState;
use crate::structs::records::{ListParams, LogParams, NewSalesRecord, SalesRecord, ShiftLogRow};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

pub fn new() -> Router<AppState> {
    Router::new()
        .route("/", get(get_records).post(add_record))
        .route("/log", get(get_shift_log))
}

/// 歷史紀錄，新的在前
pub async fn get_records(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<SalesRecord>>, AppError> {
    Ok(Json(records::get_records(&state, params.limit).await))
}

pub async fn add_record(
    State(state): State<AppState>,
    Json(payload): Json<NewSalesRecord>,
) -> Result<(StatusCode, Json<SalesRecord>), AppError> {
    let record = records::insert_record(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

// Shift actuals log，預設前 10 筆
pub async fn get_shift_log(
    State(state): State<AppState>,
    Query(params): Query<LogParams>,
) -> Result<Json<Vec<ShiftLogRow>>, AppError> {
    let rows: Vec<ShiftLogRow> = records::get_records(&state, Some(params.limit))
        .await
        .iter()
        .map(ShiftLogRow::from)
        .collect();

    Ok(Json(rows))
}
