use serde::{Deserialize, Serialize};

// generateContent 的 request / response 格式
// https://ai.google.dev/api/generate-content

#[derive(Serialize, Debug)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Serialize, Debug, Default)]
pub struct GoogleSearch {}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Deserialize, Debug, Default)]
pub struct WebChunk {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub uri: String,
}

impl GenerateContentRequest {
    pub fn grounded(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch::default(),
            }],
        }
    }
}

impl GenerateContentResponse {
    /// 第一個 candidate 所有 text part 接起來
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| m.grounding_chunks.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_text_and_grounding_from_response() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "[WEATHER] Sunny "}, {"text": "[FOOTFALL_INDEX: 1.2]"}], "role": "model"},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://example.com/a", "title": "Brixton events | Time Out"}},
                        {"retrievedContext": {"uri": "gs://bucket/doc"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.text(), "[WEATHER] Sunny [FOOTFALL_INDEX: 1.2]");
        assert_eq!(response.grounding_chunks().len(), 2);
        assert!(response.grounding_chunks()[1].web.is_none());
    }

    #[test]
    fn empty_response_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        assert!(response.grounding_chunks().is_empty());
    }

    #[test]
    fn request_uses_google_search_tool() {
        let body = serde_json::to_value(GenerateContentRequest::grounded("hi".into())).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        assert!(body["tools"][0]["google_search"].is_object());
    }
}
