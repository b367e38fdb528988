use serde::{Deserialize, Serialize};

/// 儀表板的共用狀態，對應前端 root view 的 state
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub location: String,
    pub target_date: String,
    pub total_daily_covers: u32,
    pub footfall_multiplier: f64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            location: "London Brixton".to_string(),
            target_date: "2025-02-14".to_string(),
            total_daily_covers: 118,
            footfall_multiplier: 1.0,
        }
    }
}

/// PUT /settings，只更新有給的欄位
#[derive(Deserialize, Debug, Default)]
pub struct SettingsUpdate {
    pub location: Option<String>,
    pub target_date: Option<String>,
    pub footfall_multiplier: Option<f64>,
}
