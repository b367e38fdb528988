use regex::Regex;
use std::sync::LazyLock;

use crate::{
    errors::AppError,
    services::predictor::{day_name, parse_target_date},
    structs::advisor::{AIRecommendation, AdvisorReply, AdvisorSections, Source},
};

const MAX_SOURCES: usize = 5;
const DEFAULT_FOOTFALL_INDEX: f64 = 1.0;

static FOOTFALL_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[FOOTFALL_INDEX:\s*(\d+\.?\d*)\]").expect("footfall index regex")
});

static FOOTFALL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[FOOTFALL_INDEX:.*?\]").expect("footfall tag regex"));

pub fn build_prompt(location: &str, target_date: &str, bookings: u32) -> String {
    let day = day_name(parse_target_date(target_date));

    format!(
        r#"
    Role: Strategic Operations Consultant for Hospitality.
    Location: "{location}"
    Service Date: {target_date} ({day})
    Bookings: {bookings} guests.

    Analyze real-time events, weather, and transport to provide a staffing prediction index.

    CRITICAL INSTRUCTION:
    At the very end of your response, you MUST include a footfall multiplier tag in this exact format: [FOOTFALL_INDEX: X.X]
    - 1.0 = Normal (Average traffic)
    - 0.5 - 0.9 = Quieter than usual (Rain, strikes, no events)
    - 1.1 - 1.5 = Busier than usual (Sunny, festivals, concerts)

    Analysis Sections:
    [WEATHER] Forecast and outdoor impact.
    [TRANSPORT] TfL/Local status and disruptions.
    [EVENTS] Major nearby events with exact times.
    [ADVICE] Specific FOH staffing recommendation.

    Style: Professional, sharp, bullet points (•) only. NO bold markers (**).
  "#
    )
}

/// 取第一個 [FOOTFALL_INDEX: X.X]，沒有就當作 1.0
pub fn parse_footfall_index(text: &str) -> f64 {
    FOOTFALL_INDEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(DEFAULT_FOOTFALL_INDEX)
}

pub fn strip_footfall_tags(text: &str) -> String {
    FOOTFALL_TAG.replace_all(text, "").trim().to_string()
}

/// 去掉粗體，單個星號換成 bullet
pub fn clean_text(text: &str) -> String {
    text.replace("**", "").replace('*', "•").trim().to_string()
}

fn section_between<'a>(text: &'a str, start: &str, end: Option<&str>) -> &'a str {
    let Some((_, after)) = text.split_once(start) else {
        return "";
    };

    // 標記重複出現時只取到下一個同名標記為止
    let after = after.split(start).next().unwrap_or_default();

    match end {
        Some(end) => after.split(end).next().unwrap_or_default(),
        None => after,
    }
}

pub fn split_sections(text: &str) -> AdvisorSections {
    AdvisorSections {
        weather: clean_text(section_between(text, "[WEATHER]", Some("[TRANSPORT]"))),
        transport: clean_text(section_between(text, "[TRANSPORT]", Some("[EVENTS]"))),
        events: clean_text(section_between(text, "[EVENTS]", Some("[ADVICE]"))),
        advice: clean_text(section_between(text, "[ADVICE]", None)),
    }
}

/// 把 AI 回覆整理成 AIRecommendation
pub fn to_recommendation(reply: AdvisorReply) -> Result<AIRecommendation, AppError> {
    if reply.text.trim().is_empty() {
        return Err(AppError::AdvisorError(
            "No strategic signal received.".to_string(),
        ));
    }

    let footfall_index = parse_footfall_index(&reply.text);
    let raw_response = strip_footfall_tags(&reply.text);
    let sections = split_sections(&raw_response);

    let sources: Vec<Source> = reply.sources.into_iter().take(MAX_SOURCES).collect();

    Ok(AIRecommendation {
        raw_response,
        sources,
        footfall_index,
        sections,
    })
}
