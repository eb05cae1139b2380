use std::path::PathBuf;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::domain::branch::BranchName;
use crate::domain::diff::DiffText;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    async fn git(&self, args: &[&str]) -> AppResult<Output> {
        debug!(?args, root = %self.workspace_root.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to run git: {err}")))
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn current_branch(&self) -> AppResult<Option<BranchName>> {
        let output = self.git(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "failed to get current branch name: {}",
                stderr.trim()
            )));
        }
        Ok(BranchName::parse(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn diff_against(&self, base: &BranchName, branch: &BranchName) -> AppResult<DiffText> {
        let range = format!("{}...{}", base.as_str(), branch.as_str());
        let output = self.git(&["diff", &range]).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                %range,
                stderr = %stderr.trim(),
                "git diff exited with {}; using captured output",
                output.status
            );
        }
        Ok(DiffText(String::from_utf8_lossy(&output.stdout).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::process::Command as StdCommand;

    use super::*;

    fn git(dir: &Path, args: &[&str]) {
        let status = StdCommand::new("git")
            .args([
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(dir)
            .status()
            .expect("git is installed");
        assert!(status.success(), "git {args:?} failed");
    }

    fn repo_with_feature_branch() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        git(dir.path(), &["init", "-q"]);
        git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        std::fs::write(dir.path().join("lib.txt"), "one\n").unwrap();
        git(dir.path(), &["add", "."]);
        git(dir.path(), &["commit", "-q", "-m", "initial"]);
        git(dir.path(), &["checkout", "-q", "-b", "feature/x"]);
        dir
    }

    #[tokio::test]
    async fn reports_current_branch() {
        let dir = repo_with_feature_branch();
        let cli = GitCli::new(dir.path().to_path_buf());

        let branch = cli.current_branch().await.unwrap();
        assert_eq!(branch, Some(BranchName("feature/x".to_string())));
    }

    #[tokio::test]
    async fn diff_is_empty_without_changes() {
        let dir = repo_with_feature_branch();
        let cli = GitCli::new(dir.path().to_path_buf());

        let diff = cli
            .diff_against(
                &BranchName("main".to_string()),
                &BranchName("feature/x".to_string()),
            )
            .await
            .unwrap();
        assert!(diff.is_empty());
    }

    #[tokio::test]
    async fn diff_contains_branch_changes() {
        let dir = repo_with_feature_branch();
        std::fs::write(dir.path().join("lib.txt"), "one\ntwo\n").unwrap();
        git(dir.path(), &["commit", "-q", "-am", "add two"]);
        let cli = GitCli::new(dir.path().to_path_buf());

        let diff = cli
            .diff_against(
                &BranchName("main".to_string()),
                &BranchName("feature/x".to_string()),
            )
            .await
            .unwrap();
        assert!(diff.as_str().contains("+two"));
    }

    #[tokio::test]
    async fn fails_when_git_cannot_run() {
        let dir = tempfile::tempdir().unwrap();
        let cli = GitCli::new(dir.path().join("missing"));

        let err = cli.current_branch().await.unwrap_err();
        assert!(matches!(err, AppError::VersionControl(_)));
    }
}
