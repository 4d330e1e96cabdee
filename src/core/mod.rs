pub mod aggregate;
pub mod engine;
pub mod report;

pub use crate::core::aggregate::AggregationMode;
pub use crate::domain::model::{AggregationResult, Issue, IssueState, TimelineEvent, UserId};
pub use crate::domain::ports::{ConfigProvider, IssueSource};
pub use crate::utils::error::Result;
