use std::fmt;

const SEPARATOR_MARKER: &str = "slash";
const SUMMARY_FILE_PREFIX: &str = "summary-";
const SUMMARY_FILE_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    /// Builds a branch name from raw command output or user input.
    ///
    /// Returns `None` for blank input so callers can treat "no branch" and
    /// "empty branch" the same way.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Branch name with every `/` spelled out, safe to use as a single path
    /// component. Distinct branches may normalize to the same value.
    pub fn normalized(&self) -> String {
        self.0.replace('/', SEPARATOR_MARKER)
    }

    pub fn summary_file_name(&self) -> String {
        format!(
            "{SUMMARY_FILE_PREFIX}{}.{SUMMARY_FILE_EXTENSION}",
            self.normalized()
        )
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_separator() {
        let branch = BranchName("feature/team/x".to_string());
        let file_name = branch.summary_file_name();
        assert_eq!(file_name, "summary-featureslashteamslashx.txt");
        assert!(!file_name.contains('/'));
    }

    #[test]
    fn leaves_plain_names_alone() {
        let branch = BranchName("hotfix-12".to_string());
        assert_eq!(branch.summary_file_name(), "summary-hotfix-12.txt");
    }

    #[test]
    fn normalization_collisions_are_possible() {
        let nested = BranchName("a/b".to_string());
        let literal = BranchName("aslashb".to_string());
        assert_eq!(nested.normalized(), literal.normalized());
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(BranchName::parse("   \n"), None);
        assert_eq!(
            BranchName::parse("feature/x\n"),
            Some(BranchName("feature/x".to_string()))
        );
    }
}
