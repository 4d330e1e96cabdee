use crate::core::{AggregationMode, ConfigProvider};
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_repo, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "issue-stats")]
#[command(about = "Aggregates GitHub issue statistics for a labelled triage campaign")]
pub struct CliConfig {
    /// Repository in the format <owner>/<repo>, e.g. osrf/ros2_test_cases
    /// or gazebosim/gazebo_test_cases
    #[arg(long, default_value = "osrf/ros2_test_cases")]
    pub repo: String,

    /// Label to filter issues by, e.g. jazzy or ionic
    #[arg(long)]
    pub label: String,

    /// Report assignment of open issues instead of closed-issue counts
    #[arg(long)]
    pub assignments: bool,

    /// Write the full fetched issue/event data as JSON to this path instead
    /// of printing aggregated stats
    #[arg(long)]
    pub raw_output: Option<String>,

    /// GraphQL endpoint to query
    #[arg(long, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The token is an environment concern, not a flag, so it never shows up
    /// in shell history.
    pub fn github_token(&self) -> Result<String> {
        match std::env::var("GITHUB_TOKEN") {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(StatsError::MissingConfigError {
                field: "GITHUB_TOKEN".to_string(),
            }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_repo("repo", &self.repo)?;
        validate_non_empty_string("label", &self.label)?;
        validate_url("api_url", &self.api_url)?;
        if let Some(path) = &self.raw_output {
            validate_path("raw_output", path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn repo(&self) -> &str {
        &self.repo
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn mode(&self) -> AggregationMode {
        if self.assignments {
            AggregationMode::ByAssigneeOpen
        } else {
            AggregationMode::ByReporterClosed
        }
    }

    fn raw_output(&self) -> Option<&str> {
        self.raw_output.as_deref()
    }
}
