use crate::core::aggregate::aggregate;
use crate::core::report;
use crate::core::{ConfigProvider, IssueSource};
use crate::utils::error::Result;

/// Drives one invocation: fetch, then either dump the raw records or print
/// the aggregated ranking. Returns the text written to stdout.
pub struct StatsEngine<S: IssueSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: IssueSource, C: ConfigProvider> StatsEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!(
            "Fetching issues for repo {} with label {}",
            self.config.repo(),
            self.config.label()
        );
        let issues = self
            .source
            .fetch_issues(self.config.repo(), self.config.label())
            .await?;
        tracing::info!("Fetched {} issues", issues.len());

        if let Some(path) = self.config.raw_output() {
            let data = report::to_raw_json(&issues)?;
            std::fs::write(path, data)?;
            let output = format!("Raw issue data saved to: {}", path);
            println!("{}", output);
            return Ok(output);
        }

        let ranking = report::format_ranking(&aggregate(&issues, self.config.mode()));
        let summary = report::format_summary(&issues, self.config.mode());
        let output = if ranking.is_empty() {
            summary
        } else {
            format!("{}\n{}", ranking, summary)
        };
        println!("{}", output);

        Ok(output)
    }
}
