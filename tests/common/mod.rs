#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use foh_staffing::{
    config::AppConfig,
    errors::AppError,
    services::gemini::AdvisorClient,
    state::AppState,
    structs::advisor::{AdvisorReply, Source},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// 回固定內容的 AI client，並記下收到的 prompt
#[derive(Default)]
pub struct MockAdvisor {
    pub reply: AdvisorReply,
    pub prompts: Mutex<Vec<String>>,
}

impl MockAdvisor {
    pub fn replying(text: &str, sources: Vec<Source>) -> Arc<Self> {
        Arc::new(Self {
            reply: AdvisorReply {
                text: text.to_string(),
                sources,
            },
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AdvisorClient for MockAdvisor {
    async fn generate(&self, prompt: String) -> Result<AdvisorReply, AppError> {
        self.prompts.lock().unwrap().push(prompt);
        Ok(self.reply.clone())
    }
}

pub fn test_app(advisor: Arc<MockAdvisor>) -> Router {
    let state = AppState::new(AppConfig::default()).with_advisor(advisor);
    foh_staffing::routes::app(state)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}
