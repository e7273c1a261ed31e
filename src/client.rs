use serde::Deserialize;

use crate::error::Error;
use crate::model::issue::Issue;
use crate::model::sprint::{self, Sprint};

/// TUI-side client of the intermediary service.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Sprints belonging to `board_id`, most recent first. Sprints whose
    /// `originBoardId` differs from the requested board are dropped.
    pub async fn sprints(&self, board_id: u64) -> Result<Vec<Sprint>, Error> {
        let url = format!("{}/api/sprints/{board_id}", self.base_url);
        let sprints: Vec<Sprint> = self.get_json(&url).await?;
        Ok(sprint::for_board(board_id, sprints))
    }

    /// Issues in a sprint, in upstream order. The contract is "exactly what
    /// the tracking API returned, no reordering"; done-ness plays no part.
    pub async fn issues(&self, sprint_id: u64) -> Result<Vec<Issue>, Error> {
        let url = format!("{}/api/sprint/{sprint_id}", self.base_url);
        let issues: Vec<JiraIssue> = self.get_json(&url).await?;
        Ok(issues.into_iter().map(into_issue).collect())
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, Error> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::UpstreamUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::UpstreamUnavailable(format!(
                "{url} returned status {status}"
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| Error::UpstreamUnavailable(format!("failed to parse response: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct JiraIssue {
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    summary: Option<String>,
    description: Option<String>,
    status: Option<StatusField>,
}

#[derive(Debug, Deserialize)]
struct StatusField {
    name: String,
}

fn into_issue(issue: JiraIssue) -> Issue {
    Issue {
        summary: issue.fields.summary.unwrap_or_default(),
        description: issue.fields.description,
        status: issue.fields.status.map(|s| s.name).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_issue() {
        let json = r#"{
            "key": "AB-1",
            "fields": {
                "summary": "Fix login bug",
                "description": "Users cannot log in on Safari",
                "status": { "name": "Done" }
            }
        }"#;
        let issue = into_issue(serde_json::from_str(json).unwrap());
        assert_eq!(
            issue,
            Issue {
                summary: "Fix login bug".into(),
                description: Some("Users cannot log in on Safari".into()),
                status: "Done".into(),
            }
        );
    }

    #[test]
    fn maps_issue_with_null_fields() {
        let json = r#"{"fields": {"summary": null, "description": null, "status": null}}"#;
        let issue = into_issue(serde_json::from_str(json).unwrap());
        assert_eq!(issue.summary, "");
        assert_eq!(issue.description, None);
        assert_eq!(issue.status, "");
    }

    #[test]
    fn maps_issue_with_missing_fields() {
        let json = r#"{"fields": {"summary": "Add dark mode"}}"#;
        let issue = into_issue(serde_json::from_str(json).unwrap());
        assert_eq!(issue.summary, "Add dark mode");
        assert_eq!(issue.description, None);
    }
}
