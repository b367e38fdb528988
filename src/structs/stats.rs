use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::structs::records::Shift;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShiftStats {
    pub shifts: usize,
    pub total_sales: f64,
    pub total_covers: u64,
    pub avg_sales_per_cover: f64,
    pub avg_covers_per_staff: f64,
    pub avg_sales_per_staff: f64,
    pub avg_staff_per_shift: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatsOverview {
    pub overall: ShiftStats,
    pub lunch: ShiftStats,
    pub dinner: ShiftStats,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub shift: Shift,
    pub sales: f64,
    pub covers: u32,
    pub foh_staff: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeekdayAverage {
    pub day_name: &'static str,
    pub shift: Shift,
    pub samples: usize,
    pub avg_covers: f64,
    pub avg_sales: f64,
    pub is_target_day: bool,
}

/// 排班人數 vs 營收
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StaffingYield {
    pub foh_staff: u32,
    pub samples: usize,
    pub avg_sales: f64,
    pub avg_covers: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub timeline: Vec<ChartPoint>,
    pub weekday_averages: Vec<WeekdayAverage>,
    pub staffing_yield: Vec<StaffingYield>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartParams {
    pub target_date: Option<String>,
}
