use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque account identifier (a GitHub login).
pub type UserId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueState {
    Open,
    Closed,
}

/// A cross-referencing record attached to an issue (e.g. a linked pull
/// request). Only surfaced in raw-output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub is_cross_repository: bool,
    pub url: String,
}

/// One tracked issue as fetched from the issue tracker. Immutable for the
/// lifetime of the invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub number: i64,
    pub created_at: DateTime<Utc>,
    pub reporter: UserId,
    pub assignee: Option<UserId>,
    pub state: IssueState,
    pub timeline_events: Vec<TimelineEvent>,
}

impl Issue {
    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }
}

/// Per-user counts, stably sorted by descending count with ties broken by
/// ascending user id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregationResult {
    pub entries: Vec<(UserId, usize)>,
}

impl AggregationResult {
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
