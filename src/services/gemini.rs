use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

use crate::{
    config::AppConfig,
    errors::AppError,
    structs::{
        advisor::{AdvisorReply, Source},
        gemini::{GenerateContentRequest, GenerateContentResponse},
    },
    utils::reqwest::post_json,
};

/// 產生建議文字的 AI 來源，測試時可以換成固定回覆
#[async_trait]
pub trait AdvisorClient: Send + Sync + 'static {
    async fn generate(&self, prompt: String) -> Result<AdvisorReply, AppError>;
}

pub struct GeminiClient {
    http_client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(http_client: Client, config: &AppConfig) -> Self {
        Self {
            http_client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl AdvisorClient for GeminiClient {
    async fn generate(&self, prompt: String) -> Result<AdvisorReply, AppError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AppError::ConfigError("GEMINI_API_KEY is not set".to_string()))?;

        let headers = HashMap::from([("x-goog-api-key".to_string(), api_key.clone())]);

        tracing::info!("consulting {} with google search grounding", self.model);

        let response: GenerateContentResponse = post_json(
            &self.http_client,
            &self.endpoint(),
            Some(headers),
            &GenerateContentRequest::grounded(prompt),
        )
        .await?;

        Ok(reply_from_response(&response))
    }
}

pub fn reply_from_response(response: &GenerateContentResponse) -> AdvisorReply {
    let sources = response
        .grounding_chunks()
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| Source {
            title: web.title.clone(),
            uri: web.uri.clone(),
        })
        .collect();

    AdvisorReply {
        text: response.text(),
        sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_model_name() {
        let config = AppConfig {
            gemini_base_url: "https://example.test/v1beta/".to_string(),
            gemini_model: "gemini-test".to_string(),
            ..AppConfig::default()
        };
        let client = GeminiClient::new(Client::new(), &config);
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn only_web_chunks_become_sources() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]},
            "groundingMetadata":{"groundingChunks":[
                {"web":{"uri":"https://a.test","title":"A"}},
                {},
                {"web":{"uri":"https://b.test","title":"B"}}
            ]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let reply = reply_from_response(&response);

        assert_eq!(reply.text, "ok");
        assert_eq!(reply.sources.len(), 2);
        assert_eq!(reply.sources[1].uri, "https://b.test");
    }

    #[tokio::test]
    async fn missing_api_key_is_config_error() {
        let client = GeminiClient::new(Client::new(), &AppConfig::default());
        let result = client.generate("prompt".to_string()).await;
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
