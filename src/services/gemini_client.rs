use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    config::{PlannerConfig, DEFAULT_BASE_URL, DEFAULT_MODEL},
    core::TextGenerator,
    error::{PlannerError, Result},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Thin client for the Gemini `generativelanguage` REST API.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.api_key())
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone())
            .with_timeout(config.request_timeout)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn fetch_models(&self) -> Result<Vec<String>> {
        let url = build_models_url(&self.base_url);
        let response = self.send(self.http.get(&url)).await?;

        let names = response
            .get("models")
            .and_then(|models| models.as_array())
            .map(|models| {
                models
                    .iter()
                    .filter_map(|model| model.get("name").and_then(|name| name.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(names)
    }

    pub async fn generate_content(&self, prompt: &str, temperature: f64) -> Result<String> {
        let url = build_generate_url(&self.base_url, &self.model);
        let body = GenerateContentRequest::new(prompt)
            .with_temperature(temperature)
            .into_value();

        debug!(model = %self.model, temperature, "sending generateContent request");
        let response = self.send(self.http.post(&url).json(&body)).await?;

        extract_reply_text(&response)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let mut request = request.header(API_KEY_HEADER, &self.api_key);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|err| PlannerError::Http(err.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Http(format!("Failed to read response: {err}")))?;

        if !status.is_success() {
            let api_message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|json| {
                    json.get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|value| value.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(response_text);

            return Err(PlannerError::Api(format!("HTTP {status}: {api_message}")));
        }

        serde_json::from_str(&response_text)
            .map_err(|err| PlannerError::Api(format!("Failed to parse JSON: {err}")))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn list_models(&self) -> Result<Vec<String>> {
        self.fetch_models().await
    }

    async fn generate(&self, prompt: &str, temperature: f64) -> Result<String> {
        self.generate_content(prompt, temperature).await
    }
}

/// Concatenated text parts of the first candidate.
fn extract_reply_text(response: &Value) -> Result<String> {
    let candidate = response
        .get("candidates")
        .and_then(|candidates| candidates.as_array())
        .and_then(|candidates| candidates.first());

    let Some(candidate) = candidate else {
        if let Some(reason) = response
            .get("promptFeedback")
            .and_then(|feedback| feedback.get("blockReason"))
            .and_then(|reason| reason.as_str())
        {
            return Err(PlannerError::Api(format!("Prompt was blocked: {reason}")));
        }
        return Err(PlannerError::EmptyResponse);
    };

    let text: String = candidate
        .get("content")
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = candidate.get("finishReason").and_then(|r| r.as_str()) {
            if reason != "STOP" {
                return Err(PlannerError::Api(format!(
                    "Generation stopped without text: {reason}"
                )));
            }
        }
    }

    Ok(text)
}

fn build_models_url(base_url: &str) -> String {
    format!("{}/models", base_url.trim_end_matches('/'))
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let model = model.trim_start_matches('/');
    let model = if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    };
    format!("{}/{}:generateContent", base_url.trim_end_matches('/'), model)
}

#[derive(Clone, Debug)]
pub struct GenerateContentRequest {
    prompt: String,
    temperature: Option<f64>,
}

impl GenerateContentRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn into_value(self) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": self.prompt }]
            }]
        });

        if let Some(temperature) = self.temperature {
            body["generationConfig"] = json!({ "temperature": temperature });
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url_accepts_bare_and_prefixed_models() {
        assert_eq!(
            build_generate_url("https://api.test/v1beta/", "gemini-1.5-pro"),
            "https://api.test/v1beta/models/gemini-1.5-pro:generateContent"
        );
        assert_eq!(
            build_generate_url("https://api.test/v1beta", "models/gemini-1.5-pro"),
            "https://api.test/v1beta/models/gemini-1.5-pro:generateContent"
        );
        assert_eq!(build_models_url("https://api.test/v1beta/"), "https://api.test/v1beta/models");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest::new("hello")
            .with_temperature(0.5)
            .into_value();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["generationConfig"]["temperature"], 0.5);

        let bare = GenerateContentRequest::new("hi").into_value();
        assert!(bare.get("generationConfig").is_none());
    }

    #[test]
    fn test_extract_reply_text_joins_parts() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "1. Daily " }, { "text": "Itinerary" }] },
                "finishReason": "STOP"
            }]
        });
        assert_eq!(extract_reply_text(&response).unwrap(), "1. Daily Itinerary");
    }

    #[test]
    fn test_extract_reply_text_failures() {
        let blocked = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = extract_reply_text(&blocked).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));

        let empty = json!({});
        assert!(matches!(
            extract_reply_text(&empty),
            Err(PlannerError::EmptyResponse)
        ));

        let truncated = json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] });
        assert!(extract_reply_text(&truncated)
            .unwrap_err()
            .to_string()
            .contains("MAX_TOKENS"));
    }
}
