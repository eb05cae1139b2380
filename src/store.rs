use std::fs;
use std::path::PathBuf;

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};

/// Per-branch summary files under a single output directory.
///
/// The directory is a precondition: it is never created here.
pub struct SummaryStore {
    output_dir: PathBuf,
}

impl SummaryStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path_for(&self, branch: &BranchName) -> PathBuf {
        self.output_dir.join(branch.summary_file_name())
    }

    /// Writes `summary` verbatim, replacing any previous summary for `branch`.
    pub fn persist(&self, summary: &str, branch: &BranchName) -> AppResult<PathBuf> {
        if !self.output_dir.is_dir() {
            return Err(AppError::OutputDirectory(self.output_dir.clone()));
        }
        let path = self.path_for(branch);
        fs::write(&path, summary)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn branch(name: &str) -> BranchName {
        BranchName(name.to_string())
    }

    #[test]
    fn derives_path_from_branch() {
        let store = SummaryStore::new("pr-summaries");
        assert_eq!(
            store.path_for(&branch("feature/x")),
            Path::new("pr-summaries/summary-featureslashx.txt")
        );
    }

    #[test]
    fn written_summary_reads_back_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = SummaryStore::new(dir.path());
        let summary = "## Changes\n\n- café ✓\r\n- trailing spaces   \n";

        let path = store.persist(summary, &branch("feature/x")).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), summary);
    }

    #[test]
    fn overwrites_existing_summary() {
        let dir = tempfile::tempdir().unwrap();
        let store = SummaryStore::new(dir.path());

        store.persist("first draft, longer", &branch("main")).unwrap();
        let path = store.persist("second", &branch("main")).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn persists_empty_summary() {
        let dir = tempfile::tempdir().unwrap();
        let store = SummaryStore::new(dir.path());

        let path = store.persist("", &branch("main")).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn missing_output_directory_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("pr-summaries");
        let store = SummaryStore::new(&missing);

        let err = store.persist("text", &branch("main")).unwrap_err();
        assert!(matches!(err, AppError::OutputDirectory(_)));
        assert!(!missing.exists());
    }
}
