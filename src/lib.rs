pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::github::GithubIssueSource;
pub use config::CliConfig;
pub use core::engine::StatsEngine;
pub use core::AggregationMode;
pub use utils::error::{Result, StatsError};
