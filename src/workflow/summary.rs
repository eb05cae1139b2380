use std::path::PathBuf;

use tracing::{debug, info};

use crate::context::AppContext;
use crate::domain::branch::BranchName;
use crate::domain::prompt::build_prompt;
use crate::error::{AppError, AppResult};

#[derive(Debug)]
pub struct SummaryOutcome {
    pub branch: BranchName,
    pub path: PathBuf,
    pub summary: String,
}

/// Summarizes `branch` (or the checked-out branch) against the configured
/// baseline and writes the result to the branch's summary file.
///
/// Stages run strictly in order; the file is only written once every earlier
/// stage has succeeded.
pub async fn summarize_branch(
    ctx: &AppContext,
    branch: Option<BranchName>,
    credential: Option<&str>,
) -> AppResult<SummaryOutcome> {
    let credential = credential
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::Configuration("API key is required".to_string()))?;

    let branch = match branch {
        Some(branch) => Some(branch),
        None => {
            info!("branch name not provided; resolving the current branch");
            let current = ctx.version_control.current_branch().await?;
            if let Some(current) = &current {
                info!(branch = %current, "using the current branch");
            }
            current
        }
    };
    let branch = branch
        .ok_or_else(|| AppError::Configuration("branch name is required".to_string()))?;

    let base = &ctx.config.base_branch;
    info!(%branch, %base, "fetching diff");
    let diff = ctx.version_control.diff_against(base, &branch).await?;
    if diff.is_empty() {
        info!("no changes against the baseline");
    } else {
        debug!(bytes = diff.len(), "diff captured");
    }

    let request = build_prompt(&diff, &ctx.config.model, ctx.config.temperature);
    info!(model = %request.model, "requesting summary");
    let summary = ctx
        .language_model
        .request_summary(&request, credential)
        .await?;

    let path = ctx.store.persist(&summary, &branch)?;
    info!(path = %path.display(), "summary saved");

    Ok(SummaryOutcome {
        branch,
        path,
        summary,
    })
}
