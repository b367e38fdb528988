use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shift {
    Lunch,
    Dinner,
}

impl Shift {
    pub const ALL: [Shift; 2] = [Shift::Lunch, Shift::Dinner];
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Lunch => write!(f, "Lunch"),
            Shift::Dinner => write!(f, "Dinner"),
        }
    }
}

/// 一個已完成班次的實際數據
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub id: String,
    pub date: NaiveDate,
    pub shift: Shift,
    pub sales: f64,
    pub foh_staff: u32,
    pub covers: u32,
    pub reservations: u32,
    pub walkins: u32,
}

impl SalesRecord {
    /// 平均客單價，covers 為 0 時沒有意義
    pub fn asph(&self) -> Option<f64> {
        (self.covers > 0).then(|| self.sales / self.covers as f64)
    }
}

/// 表單新增用，id 由 server 產生
#[derive(Deserialize, Debug, Clone)]
pub struct NewSalesRecord {
    pub date: NaiveDate,
    pub shift: Shift,
    pub sales: f64,
    pub foh_staff: u32,
    pub covers: u32,
    #[serde(default)]
    pub reservations: u32,
    #[serde(default)]
    pub walkins: u32,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct LogParams {
    #[serde(default = "default_log_limit")]
    pub limit: usize,
}

fn default_log_limit() -> usize {
    10
}

/// Shift actuals log 的一列
#[derive(Serialize, Debug)]
pub struct ShiftLogRow {
    pub id: String,
    pub date: NaiveDate,
    pub day_name: String,
    pub shift: Shift,
    pub foh_staff: u32,
    pub covers: u32,
    pub sales: f64,
    pub asph: Option<f64>,
}

impl From<&SalesRecord> for ShiftLogRow {
    fn from(record: &SalesRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date,
            day_name: record.date.format("%a").to_string(),
            shift: record.shift,
            foh_staff: record.foh_staff,
            covers: record.covers,
            sales: record.sales,
            asph: record.asph(),
        }
    }
}
