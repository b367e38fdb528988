//! 同星期幾歷史平均的排班預測
//!
//! 午餐、晚餐各自計算：
//! 1. 先找同星期幾的同班別紀錄，沒有的話用該班別全部紀錄
//! 2. 平均客單價與平均散客數
//! 3. AI footfall 指數依班別打折後套在散客數上
//! 4. 訂位超過容量 80% 後散客數線性遞減，最低剩 10%
//! 5. 依預估來客數決定 FOH 人數

use chrono::{Datelike, NaiveDate, Weekday};

use crate::structs::{
    prediction::{DailyPrediction, ShiftPrediction, StaffingStatus},
    records::{SalesRecord, Shift},
};

/// 每位 FOH 可以負擔的來客數上限，超過視為人手不足
const COVERS_PER_STAFF: u32 = 28;
const SATURATION_THRESHOLD: f64 = 0.8;
const SATURATION_RANGE: f64 = 0.2;
const SATURATION_FLOOR: f64 = 0.1;

impl Shift {
    pub fn capacity(&self) -> f64 {
        match self {
            Shift::Lunch => 30.0,
            Shift::Dinner => 100.0,
        }
    }

    /// 午餐人流比較固定，對外部指數的敏感度只取 30%
    pub fn multiplier_sensitivity(&self) -> f64 {
        match self {
            Shift::Lunch => 0.3,
            Shift::Dinner => 0.9,
        }
    }

    pub fn peak_time(&self) -> &'static str {
        match self {
            Shift::Lunch => "12:30",
            Shift::Dinner => "19:30",
        }
    }

    pub fn suggested_staff(&self, predicted_covers: u32) -> u32 {
        match self {
            Shift::Lunch => {
                if predicted_covers >= 25 {
                    2
                } else {
                    1
                }
            }
            Shift::Dinner => {
                if predicted_covers >= 100 {
                    4
                } else if predicted_covers >= 70 {
                    3
                } else {
                    2
                }
            }
        }
    }
}

/// 從歷史資料算出來的班別基準
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftMetrics {
    pub avg_sales_per_cover: f64,
    pub avg_walkins: f64,
    pub day_specific: bool,
}

pub fn parse_target_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn day_name(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%A").to_string())
        .unwrap_or_else(|| "Select Date".to_string())
}

pub fn dampened_multiplier(shift: Shift, multiplier: f64) -> f64 {
    1.0 + (multiplier - 1.0) * shift.multiplier_sensitivity()
}

pub fn saturation_factor(shift: Shift, bookings: u32) -> f64 {
    let capacity = shift.capacity();
    let threshold = capacity * SATURATION_THRESHOLD;
    let bookings = bookings as f64;

    if bookings > threshold {
        (1.0 - (bookings - threshold) / (capacity * SATURATION_RANGE))
            .max(SATURATION_FLOOR)
    } else {
        1.0
    }
}

pub fn shift_metrics(
    history: &[SalesRecord],
    shift: Shift,
    weekday: Option<Weekday>,
) -> ShiftMetrics {
    let all_shift: Vec<&SalesRecord> = history.iter().filter(|r| r.shift == shift).collect();

    let same_day: Vec<&SalesRecord> = match weekday {
        Some(day) => all_shift
            .iter()
            .copied()
            .filter(|r| r.date.weekday() == day)
            .collect(),
        None => Vec::new(),
    };

    let day_specific = !same_day.is_empty();
    let relevant = if day_specific { &same_day } else { &all_shift };

    let total_sales: f64 = relevant.iter().map(|r| r.sales).sum();
    let total_covers: u64 = relevant.iter().map(|r| r.covers as u64).sum();
    let total_walkins: u64 = relevant.iter().map(|r| r.walkins as u64).sum();

    ShiftMetrics {
        avg_sales_per_cover: total_sales / total_covers.max(1) as f64,
        avg_walkins: total_walkins as f64 / relevant.len().max(1) as f64,
        day_specific,
    }
}

pub fn predict_shift(
    history: &[SalesRecord],
    shift: Shift,
    weekday: Option<Weekday>,
    bookings: u32,
    multiplier: f64,
) -> ShiftPrediction {
    let metrics = shift_metrics(history, shift, weekday);

    let adjusted_walkins = metrics.avg_walkins * dampened_multiplier(shift, multiplier);
    let predicted_walkins = (adjusted_walkins * saturation_factor(shift, bookings))
        .round()
        .max(0.0) as u32;
    // query string 可以給到 u32::MAX，加總一律 saturating
    let predicted_covers = bookings.saturating_add(predicted_walkins);
    let suggested_staff = shift.suggested_staff(predicted_covers);

    let status = if predicted_covers > suggested_staff * COVERS_PER_STAFF {
        StaffingStatus::Understaffed
    } else {
        StaffingStatus::Optimal
    };

    ShiftPrediction {
        predicted_sales: predicted_covers as f64 * metrics.avg_sales_per_cover,
        predicted_covers,
        predicted_walkins,
        suggested_staff,
        status,
        peak_time: shift.peak_time(),
        day_specific: metrics.day_specific,
    }
}

pub fn predict_day(
    history: &[SalesRecord],
    target_date: &str,
    lunch_bookings: u32,
    dinner_bookings: u32,
    multiplier: f64,
) -> DailyPrediction {
    let date = parse_target_date(target_date);
    let weekday = date.map(|d| d.weekday());

    let lunch = predict_shift(history, Shift::Lunch, weekday, lunch_bookings, multiplier);
    let dinner = predict_shift(history, Shift::Dinner, weekday, dinner_bookings, multiplier);

    tracing::debug!(
        "prediction for {} lunch={} dinner={} multiplier={}",
        target_date,
        lunch.predicted_covers,
        dinner.predicted_covers,
        multiplier
    );

    DailyPrediction {
        target_date: target_date.to_string(),
        day_name: day_name(date),
        total_covers: lunch.predicted_covers.saturating_add(dinner.predicted_covers),
        total_sales: lunch.predicted_sales + dinner.predicted_sales,
        total_bookings: lunch_bookings.saturating_add(dinner_bookings),
        total_walkins: lunch.predicted_walkins.saturating_add(dinner.predicted_walkins),
        multiplier,
        lunch,
        dinner,
    }
}
