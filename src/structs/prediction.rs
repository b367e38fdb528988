use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffingStatus {
    Understaffed,
    Optimal,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShiftPrediction {
    pub predicted_sales: f64,
    pub predicted_covers: u32,
    pub predicted_walkins: u32,
    pub suggested_staff: u32,
    pub status: StaffingStatus,
    pub peak_time: &'static str,
    /// 是否有同星期幾的歷史資料可用
    pub day_specific: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailyPrediction {
    pub target_date: String,
    pub day_name: String,
    pub lunch: ShiftPrediction,
    pub dinner: ShiftPrediction,
    pub total_covers: u32,
    pub total_sales: f64,
    pub total_bookings: u32,
    pub total_walkins: u32,
    pub multiplier: f64,
}

/// GET /prediction 的 query，沒給的欄位用 settings 或預設值
#[derive(Deserialize, Debug, Default)]
pub struct PredictionParams {
    pub target_date: Option<String>,
    pub lunch_bookings: Option<u32>,
    pub dinner_bookings: Option<u32>,
    pub multiplier: Option<f64>,
}

pub const DEFAULT_LUNCH_BOOKINGS: u32 = 5;
pub const DEFAULT_DINNER_BOOKINGS: u32 = 45;
