use crate::core::aggregate::AggregationMode;
use crate::domain::model::Issue;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of issue records for one repository/label pair. Implementations
/// return the full, already-paginated sequence.
#[async_trait]
pub trait IssueSource: Send + Sync {
    async fn fetch_issues(&self, repo: &str, label: &str) -> Result<Vec<Issue>>;
}

pub trait ConfigProvider: Send + Sync {
    fn repo(&self) -> &str;
    fn label(&self) -> &str;
    fn mode(&self) -> AggregationMode;
    fn raw_output(&self) -> Option<&str>;
}
