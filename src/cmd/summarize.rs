use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;

use crate::config::{AppConfig, DEFAULT_ENV_FILE, ResponseMode};
use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::infra::git::GitCli;
use crate::infra::llm::OpenAiClient;
use crate::workflow::summary::{SummaryOutcome, summarize_branch};

#[derive(Args, Debug, Clone, Default)]
pub struct SummarizeArgs {
    /// Branch to summarize (defaults to the checked-out branch).
    #[arg(short, long)]
    pub branch: Option<String>,
    /// Baseline branch to diff against.
    #[arg(long)]
    pub base: Option<String>,
    /// Environment file holding OPENAI_API_KEY (defaults to ./.env).
    #[arg(long)]
    pub env_file: Option<PathBuf>,
    /// Directory the summary file is written to; must already exist.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Completion model to request.
    #[arg(long)]
    pub model: Option<String>,
    /// Fail instead of writing an empty summary when the response is malformed.
    #[arg(long)]
    pub strict: bool,
}

/// Loads configuration for `args`, applying command-line overrides on top of
/// the environment file.
pub fn load_config(args: &SummarizeArgs) -> AppResult<AppConfig> {
    let cwd = std::env::current_dir()?;
    let env_file = args
        .env_file
        .clone()
        .unwrap_or_else(|| cwd.join(DEFAULT_ENV_FILE));
    let config = AppConfig::load(&cwd, &env_file)?;
    apply_overrides(config, args, &cwd)
}

fn apply_overrides(mut config: AppConfig, args: &SummarizeArgs, cwd: &Path) -> AppResult<AppConfig> {
    if let Some(base) = &args.base {
        config.base_branch = BranchName::parse(base)
            .ok_or_else(|| AppError::Configuration("--base must not be blank".to_string()))?;
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = cwd.join(dir);
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if args.strict {
        config.response_mode = ResponseMode::Strict;
    }
    Ok(config)
}

pub async fn run(args: SummarizeArgs) -> AppResult<SummaryOutcome> {
    let config = load_config(&args)?;

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let language_model = Arc::new(OpenAiClient::new(
        config.endpoint.clone(),
        config.response_mode,
    ));
    let credential = config.api_key.clone();
    let context = AppContext::new(config, git, language_model);

    let branch = args.branch.as_deref().and_then(BranchName::parse);
    summarize_branch(&context, branch, credential.as_deref()).await
}
