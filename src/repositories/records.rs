use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    errors::AppError,
    state::AppState,
    structs::records::{NewSalesRecord, SalesRecord, Shift},
};

/// 全部紀錄，新的在前
pub async fn get_records(state: &AppState, limit: Option<usize>) -> Vec<SalesRecord> {
    let records = state.records.read().await;
    let limit = limit.unwrap_or(records.len());

    records.iter().take(limit).cloned().collect()
}

pub async fn snapshot(state: &AppState) -> Vec<SalesRecord> {
    state.records.read().await.clone()
}

pub async fn insert_record(state: &AppState, payload: NewSalesRecord) -> Result<SalesRecord, AppError> {
    if !payload.sales.is_finite() || payload.sales < 0.0 {
        return Err(AppError::InvalidInput(
            "sales must be a non-negative number".to_string(),
        ));
    }

    let record = SalesRecord {
        id: Uuid::new_v4().to_string(),
        date: payload.date,
        shift: payload.shift,
        sales: payload.sales,
        foh_staff: payload.foh_staff,
        covers: payload.covers,
        reservations: payload.reservations,
        walkins: payload.walkins,
    };

    state.records.write().await.insert(0, record.clone());

    tracing::info!(
        "new {} record for {} ({} covers)",
        record.shift,
        record.date,
        record.covers
    );

    Ok(record)
}

/// 啟動時的歷史資料
pub fn seed_records() -> Vec<SalesRecord> {
    // (日期, 班別, 營收, FOH, 來客, 訂位, 散客)
    let rows: [(&str, Shift, f64, u32, u32, u32, u32); 16] = [
        ("2025-02-09", Shift::Dinner, 2150.0, 2, 62, 44, 18),
        ("2025-02-09", Shift::Lunch, 690.0, 1, 23, 9, 14),
        ("2025-02-08", Shift::Dinner, 3420.0, 3, 96, 71, 25),
        ("2025-02-08", Shift::Lunch, 980.0, 2, 31, 14, 17),
        ("2025-02-07", Shift::Dinner, 3150.0, 3, 88, 62, 26),
        ("2025-02-07", Shift::Lunch, 610.0, 1, 21, 6, 15),
        ("2025-02-06", Shift::Dinner, 2280.0, 2, 66, 47, 19),
        ("2025-02-06", Shift::Lunch, 520.0, 1, 18, 5, 13),
        ("2025-02-05", Shift::Dinner, 1890.0, 2, 55, 38, 17),
        ("2025-02-05", Shift::Lunch, 480.0, 1, 16, 4, 12),
        ("2025-02-04", Shift::Dinner, 1740.0, 2, 51, 36, 15),
        ("2025-02-04", Shift::Lunch, 450.0, 1, 15, 4, 11),
        ("2025-01-31", Shift::Dinner, 3010.0, 3, 85, 60, 25),
        ("2025-01-31", Shift::Lunch, 640.0, 1, 22, 7, 15),
        ("2025-01-24", Shift::Dinner, 2890.0, 3, 82, 59, 23),
        ("2025-01-24", Shift::Lunch, 570.0, 1, 19, 6, 13),
    ];

    rows.iter()
        .filter_map(
            |&(date, shift, sales, foh_staff, covers, reservations, walkins)| {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
                Some(SalesRecord {
                    id: format!("seed-{}-{}", date, shift.to_string().to_lowercase()),
                    date,
                    shift,
                    sales,
                    foh_staff,
                    covers,
                    reservations,
                    walkins,
                })
            },
        )
        .collect()
}
