/// Unified diff text between the baseline reference and a branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffText(pub String);

impl DiffText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
