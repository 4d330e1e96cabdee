use clap::Parser;
use issue_stats::utils::{logger, validation::Validate};
use issue_stats::{CliConfig, GithubIssueSource, StatsEngine};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting issue-stats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let token = match config.github_token() {
        Ok(token) => token,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let source = GithubIssueSource::new(config.api_url.clone(), token);
    let engine = StatsEngine::new(source, config);

    if let Err(e) = engine.run().await {
        tracing::error!("❌ Query failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
