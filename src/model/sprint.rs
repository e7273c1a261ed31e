use serde::{Deserialize, Serialize};

/// A fixed-duration work iteration on a board. Consumed read-only from the
/// tracking API and discarded after render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    pub state: SprintState,
    pub origin_board_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintState {
    Active,
    Closed,
    Future,
}

impl SprintState {
    pub fn label(self) -> &'static str {
        match self {
            SprintState::Active => "ACTIVE",
            SprintState::Closed => "CLOSED",
            SprintState::Future => "FUTURE",
        }
    }
}

/// Keeps only sprints that actually belong to `board_id` and orders them most
/// recent first (higher id = more recent). The upstream list endpoint may
/// return cross-board results under pagination, so the filter is a
/// correctness requirement.
pub fn for_board(board_id: u64, mut sprints: Vec<Sprint>) -> Vec<Sprint> {
    sprints.retain(|s| s.origin_board_id == board_id);
    sprints.sort_by(|a, b| b.id.cmp(&a.id));
    sprints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint(id: u64, origin_board_id: u64) -> Sprint {
        Sprint {
            id,
            name: format!("Sprint {id}"),
            state: SprintState::Closed,
            origin_board_id,
        }
    }

    #[test]
    fn filters_foreign_boards_and_sorts_descending() {
        let sprints = vec![sprint(5, 10), sprint(7, 10), sprint(9, 99)];
        let result = for_board(10, sprints);
        let ids: Vec<u64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 5]);
        assert!(result.iter().all(|s| s.origin_board_id == 10));
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(for_board(10, vec![]).is_empty());
    }

    #[test]
    fn deserializes_wire_names_and_ignores_extras() {
        let json = r#"{
            "id": 42,
            "self": "https://example.atlassian.net/rest/agile/1.0/sprint/42",
            "state": "active",
            "name": "Sprint 42",
            "startDate": "2024-03-01T08:00:00.000Z",
            "originBoardId": 139
        }"#;
        let sprint: Sprint = serde_json::from_str(json).unwrap();
        assert_eq!(sprint.id, 42);
        assert_eq!(sprint.state, SprintState::Active);
        assert_eq!(sprint.origin_board_id, 139);
    }

    #[test]
    fn state_labels_are_uppercase() {
        assert_eq!(SprintState::Active.label(), "ACTIVE");
        assert_eq!(SprintState::Closed.label(), "CLOSED");
        assert_eq!(SprintState::Future.label(), "FUTURE");
    }
}
