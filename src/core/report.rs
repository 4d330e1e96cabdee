use crate::core::aggregate::AggregationMode;
use crate::domain::model::{AggregationResult, Issue};
use crate::utils::error::Result;

/// One line per user, highest count first.
pub fn format_ranking(result: &AggregationResult) -> String {
    let mut lines = Vec::with_capacity(result.entries.len());
    for (user, count) in &result.entries {
        lines.push(format!("{}: {}", user, count));
    }
    lines.join("\n")
}

/// Campaign-level totals printed after the ranking.
pub fn format_summary(issues: &[Issue], mode: AggregationMode) -> String {
    let closed = issues.iter().filter(|i| i.is_closed()).count();
    let open = issues.len() - closed;

    match mode {
        AggregationMode::ByReporterClosed => format!(
            "Issues closed {} out of {}, {:.1}%",
            closed,
            issues.len(),
            percentage(closed, issues.len())
        ),
        AggregationMode::ByAssigneeOpen => {
            let assigned = issues
                .iter()
                .filter(|i| !i.is_closed() && i.assignee.is_some())
                .count();
            format!(
                "Total number of assigned issues {} out of {} open issues, {:.1}%",
                assigned,
                open,
                percentage(assigned, open)
            )
        }
    }
}

pub fn to_raw_json(issues: &[Issue]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(issues)?)
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{IssueState, TimelineEvent};
    use chrono::Utc;

    fn issue(reporter: &str, assignee: Option<&str>, state: IssueState) -> Issue {
        Issue {
            id: "I_1".to_string(),
            number: 7,
            created_at: Utc::now(),
            reporter: reporter.to_string(),
            assignee: assignee.map(str::to_string),
            state,
            timeline_events: vec![TimelineEvent {
                is_cross_repository: true,
                url: "https://github.com/owner/other/pull/42".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_ranking() {
        let result = AggregationResult {
            entries: vec![("a".to_string(), 2), ("b".to_string(), 1)],
        };
        assert_eq!(format_ranking(&result), "a: 2\nb: 1");
    }

    #[test]
    fn test_format_ranking_empty() {
        assert_eq!(format_ranking(&AggregationResult::default()), "");
    }

    #[test]
    fn test_summary_closed_mode() {
        let issues = vec![
            issue("a", None, IssueState::Closed),
            issue("b", None, IssueState::Closed),
            issue("c", None, IssueState::Open),
            issue("d", None, IssueState::Open),
        ];
        assert_eq!(
            format_summary(&issues, AggregationMode::ByReporterClosed),
            "Issues closed 2 out of 4, 50.0%"
        );
    }

    #[test]
    fn test_summary_assignment_mode() {
        let issues = vec![
            issue("a", Some("x"), IssueState::Open),
            issue("b", None, IssueState::Open),
            issue("c", Some("x"), IssueState::Closed),
        ];
        assert_eq!(
            format_summary(&issues, AggregationMode::ByAssigneeOpen),
            "Total number of assigned issues 1 out of 2 open issues, 50.0%"
        );
    }

    #[test]
    fn test_summary_zero_denominator() {
        assert_eq!(
            format_summary(&[], AggregationMode::ByReporterClosed),
            "Issues closed 0 out of 0, 0.0%"
        );
        assert_eq!(
            format_summary(&[], AggregationMode::ByAssigneeOpen),
            "Total number of assigned issues 0 out of 0 open issues, 0.0%"
        );
    }

    #[test]
    fn test_raw_json_carries_timeline_events() {
        let issues = vec![issue("a", None, IssueState::Closed)];
        let bytes = to_raw_json(&issues).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed[0]["reporter"], "a");
        assert_eq!(parsed[0]["state"], "CLOSED");
        assert_eq!(parsed[0]["timeline_events"][0]["is_cross_repository"], true);
    }
}
