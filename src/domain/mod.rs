pub mod branch;
pub mod diff;
pub mod prompt;
