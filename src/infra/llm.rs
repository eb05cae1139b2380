use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ResponseMode;
use crate::domain::prompt::ChatRequest;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    response_mode: ResponseMode,
}

impl OpenAiClient {
    pub fn new(endpoint: String, response_mode: ResponseMode) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            response_mode,
        }
    }

    fn auth_header(credential: &str) -> String {
        format!("Bearer {credential}")
    }
}

/// Pulls `choices[0].message.content` out of a completion response.
pub fn extract_content(payload: &Value) -> Option<&str> {
    payload
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}

#[async_trait]
impl LanguageModelService for OpenAiClient {
    async fn request_summary(&self, request: &ChatRequest, credential: &str) -> AppResult<String> {
        debug!(endpoint = %self.endpoint, model = %request.model, "posting completion request");
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, Self::auth_header(credential))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| {
                AppError::LanguageModel(format!("failed to call completion service: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() && self.response_mode == ResponseMode::Strict {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::LanguageModel(format!(
                "completion service responded with {status}: {body}"
            )));
        }

        let payload: Value = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse completion response: {err}"))
        })?;

        match (extract_content(&payload), self.response_mode) {
            (Some(content), _) => Ok(content.to_string()),
            (None, ResponseMode::Lenient) => {
                warn!(%status, "completion response had no message content; using empty summary");
                Ok(String::new())
            }
            (None, ResponseMode::Strict) => Err(AppError::MalformedResponse(format!(
                "missing choices[0].message.content in {payload}"
            ))),
        }
    }
}
