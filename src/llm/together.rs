use serde::{Deserialize, Serialize};

use super::{GenerationParams, STOP_MARKER};
use crate::error::PipelineError;

/// Client for the hosted inference endpoint. One blocking round trip per
/// call: no retries, no streaming.
#[derive(Debug, Clone)]
pub struct TogetherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    repetition_penalty: f32,
    stop: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    output: Option<InferenceOutput>,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    #[serde(default)]
    choices: Vec<InferenceChoice>,
}

#[derive(Debug, Deserialize)]
struct InferenceChoice {
    text: Option<String>,
}

impl TogetherClient {
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            model: model.to_string(),
        }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, PipelineError> {
        let request = InferenceRequest {
            model: &self.model,
            prompt,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            repetition_penalty: params.repetition_penalty,
            stop: [STOP_MARKER],
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", &self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::GenerationFailed { status, body });
        }

        let api_response: InferenceResponse = response.json().await?;
        extract_text(api_response)
    }
}

/// A 200 with no text under `output.choices[0].text` is a distinct,
/// recoverable failure, not a panic.
fn extract_text(response: InferenceResponse) -> Result<String, PipelineError> {
    response
        .output
        .and_then(|o| o.choices.into_iter().next())
        .and_then(|c| c.text)
        .map(|t| t.trim().to_string())
        .ok_or(PipelineError::MissingGeneratedText)
}
