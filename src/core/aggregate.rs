use crate::domain::model::{AggregationResult, Issue, UserId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Count closed issues per reporting user.
    ByReporterClosed,
    /// Count open issues per assignee; unassigned open issues are skipped.
    ByAssigneeOpen,
}

/// Groups and counts issues per user for the given mode. Pure: no I/O, input
/// untouched. An empty input yields an empty result.
pub fn aggregate(issues: &[Issue], mode: AggregationMode) -> AggregationResult {
    let mut counts: HashMap<&UserId, usize> = HashMap::new();

    for issue in issues {
        let user = match mode {
            AggregationMode::ByReporterClosed if issue.is_closed() => Some(&issue.reporter),
            AggregationMode::ByAssigneeOpen if !issue.is_closed() => issue.assignee.as_ref(),
            _ => None,
        };
        if let Some(user) = user {
            *counts.entry(user).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<(UserId, usize)> = counts
        .into_iter()
        .map(|(user, count)| (user.clone(), count))
        .collect();
    // Descending by count, ties broken by ascending user id for determinism.
    entries.sort_by(|(user_a, count_a), (user_b, count_b)| {
        count_b.cmp(count_a).then_with(|| user_a.cmp(user_b))
    });

    AggregationResult { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::IssueState;
    use chrono::Utc;

    fn issue(reporter: &str, assignee: Option<&str>, state: IssueState) -> Issue {
        Issue {
            id: format!("I_{}", reporter),
            number: 1,
            created_at: Utc::now(),
            reporter: reporter.to_string(),
            assignee: assignee.map(str::to_string),
            state,
            timeline_events: vec![],
        }
    }

    #[test]
    fn test_by_reporter_counts_closed_only() {
        let issues = vec![
            issue("a", None, IssueState::Closed),
            issue("a", None, IssueState::Closed),
            issue("b", None, IssueState::Closed),
            issue("c", None, IssueState::Open),
        ];

        let result = aggregate(&issues, AggregationMode::ByReporterClosed);
        assert_eq!(
            result.entries,
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_by_assignee_skips_unassigned_and_closed() {
        let issues = vec![
            issue("r1", Some("x"), IssueState::Open),
            issue("r2", None, IssueState::Open),
            issue("r3", Some("x"), IssueState::Closed),
        ];

        let result = aggregate(&issues, AggregationMode::ByAssigneeOpen);
        assert_eq!(result.entries, vec![("x".to_string(), 1)]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let result = aggregate(&[], AggregationMode::ByReporterClosed);
        assert!(result.is_empty());
        assert_eq!(result.total(), 0);

        let result = aggregate(&[], AggregationMode::ByAssigneeOpen);
        assert!(result.is_empty());
    }

    #[test]
    fn test_ties_break_by_ascending_user() {
        let issues = vec![
            issue("zed", None, IssueState::Closed),
            issue("amy", None, IssueState::Closed),
            issue("amy", None, IssueState::Closed),
            issue("bob", None, IssueState::Closed),
            issue("zed", None, IssueState::Closed),
        ];

        let result = aggregate(&issues, AggregationMode::ByReporterClosed);
        assert_eq!(
            result.entries,
            vec![
                ("amy".to_string(), 2),
                ("zed".to_string(), 2),
                ("bob".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_total_matches_filter_predicate() {
        let issues = vec![
            issue("a", Some("x"), IssueState::Closed),
            issue("b", Some("y"), IssueState::Open),
            issue("c", None, IssueState::Open),
            issue("d", Some("y"), IssueState::Open),
        ];

        let closed = issues.iter().filter(|i| i.is_closed()).count();
        let open_assigned = issues
            .iter()
            .filter(|i| !i.is_closed() && i.assignee.is_some())
            .count();

        assert_eq!(
            aggregate(&issues, AggregationMode::ByReporterClosed).total(),
            closed
        );
        assert_eq!(
            aggregate(&issues, AggregationMode::ByAssigneeOpen).total(),
            open_assigned
        );
    }

    #[test]
    fn test_pure_and_idempotent() {
        let issues = vec![
            issue("a", Some("x"), IssueState::Closed),
            issue("b", Some("x"), IssueState::Open),
        ];
        let snapshot = format!("{:?}", issues);

        let first = aggregate(&issues, AggregationMode::ByReporterClosed);
        let second = aggregate(&issues, AggregationMode::ByReporterClosed);

        assert_eq!(first, second);
        assert_eq!(snapshot, format!("{:?}", issues));
    }
}
