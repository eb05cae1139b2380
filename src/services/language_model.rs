use async_trait::async_trait;

use crate::domain::prompt::ChatRequest;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Sends one completion request and returns the text of the first choice.
    async fn request_summary(&self, request: &ChatRequest, credential: &str) -> AppResult<String>;
}
