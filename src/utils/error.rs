use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("GitHub API error: {message}")]
    ApiError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

impl StatsError {
    /// Exit code for the CLI: 1 for argument/configuration problems,
    /// 2 for anything that went wrong talking to the API or writing output.
    pub fn exit_code(&self) -> i32 {
        match self {
            StatsError::InvalidConfigValueError { .. } | StatsError::MissingConfigError { .. } => 1,
            StatsError::RequestError(_)
            | StatsError::ApiError { .. }
            | StatsError::IoError(_)
            | StatsError::SerializationError(_) => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatsError::RequestError(_) => "Check network connectivity and GitHub API status",
            StatsError::ApiError { .. } => {
                "Verify the repository exists and GITHUB_TOKEN has read access to it"
            }
            StatsError::IoError(_) => "Check that the output path is writable",
            StatsError::SerializationError(_) => "Re-run with --verbose and inspect the response",
            StatsError::InvalidConfigValueError { .. } => "Fix the flagged argument and re-run",
            StatsError::MissingConfigError { .. } => {
                "Export GITHUB_TOKEN with a token that can read the target repository"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
