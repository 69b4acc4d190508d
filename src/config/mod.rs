pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_file_extension, validate_path, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "jira-user-mapper")]
#[command(about = "Derive Azure DevOps usernames and app-user flags for a Jira user export")]
pub struct CliConfig {
    /// Jira user export (JiraUserId, JiraFirstLastName, JiraUserEmail)
    #[arg(long, default_value = "initial-user-mapping.csv")]
    pub input: String,

    #[arg(long, default_value = "updated-user-mapping.csv")]
    pub output: String,

    /// Also write `email=username` lines for every human user
    #[arg(long)]
    pub user_map: Option<String>,

    /// Read input/output paths from a TOML file instead
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show what would be written without writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn user_map_path(&self) -> Option<&str> {
        self.user_map.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_paths(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_paths<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_path("input", config.input_path())?;
    validate_path("output", config.output_path())?;
    validate_file_extension("input", config.input_path(), &["csv"])?;
    validate_file_extension("output", config.output_path(), &["csv"])?;
    validate_distinct_paths("output", config.input_path(), config.output_path())?;

    if let Some(user_map) = config.user_map_path() {
        validate_path("user_map", user_map)?;
        validate_distinct_paths("user_map", config.input_path(), user_map)?;
        validate_distinct_paths("user_map", config.output_path(), user_map)?;
    }

    Ok(())
}
