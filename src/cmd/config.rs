use clap::{Args, Subcommand};

use crate::cmd::summarize::{SummarizeArgs, load_config};
use crate::config::API_KEY_VAR;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration (secrets masked).
    Show(SummarizeArgs),
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show(args) => run_show(&args),
    }
}

fn run_show(args: &SummarizeArgs) -> AppResult<()> {
    let cfg = load_config(args)?;

    println!("Environment file: {}", cfg.env_file.display());
    println!("Workspace: {}", cfg.workspace_root.display());
    println!("{API_KEY_VAR}: {}", mask_secret(&cfg.api_key));
    println!("Base branch: {}", cfg.base_branch);
    println!("Endpoint: {}", cfg.endpoint);
    println!("Model: {}", cfg.model);
    println!("Temperature: {}", cfg.temperature);
    println!("Output directory: {}", cfg.output_dir.display());
    println!("Response mode: {}", cfg.response_mode.as_str());

    Ok(())
}

fn mask_secret(value: &Option<String>) -> String {
    match value {
        Some(token) if token.chars().count() > 6 => {
            let chars: Vec<char> = token.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[chars.len() - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        Some(token) if !token.is_empty() => "***".to_string(),
        _ => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_long_secrets() {
        assert_eq!(mask_secret(&Some("sk-abcdef123".to_string())), "sk-***123");
    }

    #[test]
    fn masks_short_and_missing_secrets() {
        assert_eq!(mask_secret(&Some("abc".to_string())), "***");
        assert_eq!(mask_secret(&Some(String::new())), "<not set>");
        assert_eq!(mask_secret(&None), "<not set>");
    }
}
