use crate::domain::model::{Issue, IssueState, TimelineEvent};
use crate::domain::ports::IssueSource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;

const ISSUE_QUERY: &str = r#"
query($searchQuery: String!, $cursor: String) {
  search(first: 100, after: $cursor, query: $searchQuery, type: ISSUE) {
    pageInfo {
      hasNextPage
      endCursor
    }
    nodes {
      ... on Issue {
        id
        number
        createdAt
        closed
        author {
          login
        }
        assignees(first: 100) {
          nodes {
            login
          }
        }
        timelineItems(first: 100, itemTypes: [CROSS_REFERENCED_EVENT]) {
          totalCount
          nodes {
            ... on CrossReferencedEvent {
              isCrossRepository
              source {
                ... on PullRequest {
                  url
                }
                ... on Issue {
                  url
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Fetches issues through the GitHub GraphQL search API, draining the cursor
/// pagination before returning.
pub struct GithubIssueSource {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubIssueSource {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            token,
        }
    }

    async fn fetch_page(&self, search: &str, cursor: Option<&str>) -> Result<SearchResults> {
        let body = serde_json::json!({
            "query": ISSUE_QUERY,
            "variables": {
                "searchQuery": search,
                "cursor": cursor,
            },
        });

        tracing::debug!("Making GraphQL request to: {}", self.api_url);
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .header(USER_AGENT, "issue-stats")
            .json(&body)
            .send()
            .await?;

        tracing::debug!("GraphQL response status: {}", response.status());
        if !response.status().is_success() {
            return Err(StatsError::ApiError {
                message: format!(
                    "GitHub GraphQL query failed with status {}",
                    response.status()
                ),
            });
        }

        let envelope: GraphqlResponse = response.json().await?;
        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(StatsError::ApiError {
                    message: messages.join("; "),
                });
            }
        }

        let data = envelope.data.ok_or_else(|| StatsError::ApiError {
            message: "GraphQL response contained no data".to_string(),
        })?;
        Ok(data.search)
    }
}

#[async_trait]
impl IssueSource for GithubIssueSource {
    async fn fetch_issues(&self, repo: &str, label: &str) -> Result<Vec<Issue>> {
        let search = format!("repo:{} is:issue label:{}", repo, label);
        let mut cursor: Option<String> = None;
        let mut issues = Vec::new();

        loop {
            let page = self.fetch_page(&search, cursor.as_deref()).await?;
            tracing::debug!("Fetched page with {} issues", page.nodes.len());
            issues.extend(page.nodes.into_iter().map(Issue::from));

            if !page.page_info.has_next_page {
                break;
            }
            match page.page_info.end_cursor {
                Some(next) => cursor = Some(next),
                // hasNextPage without a cursor would loop forever
                None => break,
            }
        }

        Ok(issues)
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<QueryData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    search: SearchResults,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResults {
    page_info: PageInfo,
    nodes: Vec<IssueNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueNode {
    id: String,
    number: i64,
    created_at: DateTime<Utc>,
    closed: bool,
    author: Option<Actor>,
    assignees: ActorConnection,
    timeline_items: TimelineConnection,
}

#[derive(Debug, Deserialize)]
struct Actor {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ActorConnection {
    nodes: Vec<Actor>,
}

#[derive(Debug, Deserialize)]
struct TimelineConnection {
    #[serde(default)]
    nodes: Vec<TimelineNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineNode {
    #[serde(default)]
    is_cross_repository: bool,
    #[serde(default)]
    source: Option<SourceNode>,
}

#[derive(Debug, Deserialize)]
struct SourceNode {
    url: Option<String>,
}

impl From<IssueNode> for Issue {
    fn from(node: IssueNode) -> Self {
        // Deleted accounts come back with a null author.
        let reporter = node
            .author
            .map(|a| a.login)
            .unwrap_or_else(|| "ghost".to_string());

        // The wire carries up to 100 assignees; the domain keeps at most one.
        let assignee = node.assignees.nodes.into_iter().next().map(|a| a.login);

        let timeline_events = node
            .timeline_items
            .nodes
            .into_iter()
            .filter_map(|event| {
                let url = event.source.and_then(|s| s.url)?;
                Some(TimelineEvent {
                    is_cross_repository: event.is_cross_repository,
                    url,
                })
            })
            .collect();

        Issue {
            id: node.id,
            number: node.number,
            created_at: node.created_at,
            reporter,
            assignee,
            state: if node.closed {
                IssueState::Closed
            } else {
                IssueState::Open
            },
            timeline_events,
        }
    }
}
