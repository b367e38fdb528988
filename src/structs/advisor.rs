use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

impl Source {
    /// 搜尋結果標題常帶 "| 網站名"，顯示時只留前半
    pub fn short_title(&self) -> &str {
        self.title.split('|').next().unwrap_or_default().trim()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AdvisorSections {
    pub weather: String,
    pub transport: String,
    pub events: String,
    pub advice: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AIRecommendation {
    pub raw_response: String,
    pub sources: Vec<Source>,
    pub footfall_index: f64,
    pub sections: AdvisorSections,
}

/// AI client 回傳的原始內容
#[derive(Debug, Clone, Default)]
pub struct AdvisorReply {
    pub text: String,
    pub sources: Vec<Source>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AdvisorRequest {
    pub location: Option<String>,
    pub target_date: Option<String>,
    pub bookings: Option<u32>,
}
