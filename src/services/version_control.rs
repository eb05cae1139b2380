use async_trait::async_trait;

use crate::domain::branch::BranchName;
use crate::domain::diff::DiffText;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Name of the currently checked-out branch, `None` if git reports nothing.
    async fn current_branch(&self) -> AppResult<Option<BranchName>>;
    /// Diff of `branch` against the merge base with `base`.
    async fn diff_against(&self, base: &BranchName, branch: &BranchName) -> AppResult<DiffText>;
}
