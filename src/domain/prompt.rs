use serde::Serialize;

use crate::domain::diff::DiffText;

pub const SUMMARY_INSTRUCTION: &str =
    "Concisely summarize the following code changes in LESS THAN 1000 WORDS IN MARKDOWN FORMAT:";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

/// Wraps the diff in the summarization instruction. The diff is passed through
/// untouched regardless of size; the completion service may reject oversized
/// requests.
pub fn build_prompt(diff: &DiffText, model: &str, temperature: f32) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::user(format!(
            "{SUMMARY_INSTRUCTION}\n\n{}",
            diff.as_str()
        ))],
        temperature,
    }
}
