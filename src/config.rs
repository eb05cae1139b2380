use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_BASE_BRANCH: &str = "main";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_OUTPUT_DIR: &str = "pr-summaries";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
const BASE_BRANCH_VAR: &str = "PRSUM_BASE_BRANCH";
const ENDPOINT_VAR: &str = "PRSUM_ENDPOINT";
const MODEL_VAR: &str = "PRSUM_MODEL";
const TEMPERATURE_VAR: &str = "PRSUM_TEMPERATURE";
const OUTPUT_DIR_VAR: &str = "PRSUM_OUTPUT_DIR";
const RESPONSE_MODE_VAR: &str = "PRSUM_RESPONSE_MODE";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_branch: BranchName,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub output_dir: PathBuf,
    pub response_mode: ResponseMode,
    pub workspace_root: PathBuf,
    pub env_file: PathBuf,
}

/// How to treat a completion response without `choices[0].message.content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Fall back to an empty summary.
    #[default]
    Lenient,
    /// Fail the run.
    Strict,
}

impl ResponseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMode::Lenient => "lenient",
            ResponseMode::Strict => "strict",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "lenient" => Some(ResponseMode::Lenient),
            "strict" => Some(ResponseMode::Strict),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Reads settings from the process environment, falling back to the
    /// entries of `env_file`.
    pub fn load(workspace_root: &Path, env_file: &Path) -> AppResult<Self> {
        Self::load_with(workspace_root, env_file, |key| env::var(key).ok())
    }

    /// Like [`AppConfig::load`] with an explicit process environment. Values
    /// from `process_env` take precedence over the file, as with `dotenv`.
    pub fn load_with<F>(workspace_root: &Path, env_file: &Path, process_env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if !env_file.is_file() {
            return Err(AppError::Configuration(format!(
                "environment file {} not found; create it or pass --env-file",
                env_file.display()
            )));
        }
        let load_error = |err: dotenv::Error| {
            AppError::Configuration(format!(
                "failed to load environment file {}: {err}",
                env_file.display()
            ))
        };
        let file_vars = dotenv::from_path_iter(env_file)
            .map_err(load_error)?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(load_error)?;

        Self::from_lookup(workspace_root, env_file, |key| {
            process_env(key).or_else(|| file_vars.get(key).cloned())
        })
    }

    pub fn from_lookup<F>(workspace_root: &Path, env_file: &Path, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_branch = match read(BASE_BRANCH_VAR) {
            Some(raw) => BranchName::parse(&raw).ok_or_else(|| {
                AppError::Configuration(format!("{BASE_BRANCH_VAR} must not be blank"))
            })?,
            None => BranchName(DEFAULT_BASE_BRANCH.to_string()),
        };

        let temperature = match read(TEMPERATURE_VAR) {
            Some(raw) => raw.trim().parse::<f32>().map_err(|err| {
                AppError::Configuration(format!("invalid {TEMPERATURE_VAR} '{raw}': {err}"))
            })?,
            None => DEFAULT_TEMPERATURE,
        };

        let response_mode = match read(RESPONSE_MODE_VAR) {
            Some(raw) => ResponseMode::from_str(&raw).ok_or_else(|| {
                AppError::Configuration(format!(
                    "invalid {RESPONSE_MODE_VAR} '{raw}' (expected lenient or strict)"
                ))
            })?,
            None => ResponseMode::default(),
        };

        let output_dir = read(OUTPUT_DIR_VAR).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Ok(Self {
            api_key: lookup(API_KEY_VAR),
            base_branch,
            endpoint: read(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: read(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            output_dir: workspace_root.join(output_dir),
            response_mode,
            workspace_root: workspace_root.to_path_buf(),
            env_file: env_file.to_path_buf(),
        })
    }
}
