use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// Tracking-system backend consumed by the intermediary service. The two
/// methods return the raw upstream objects so the HTTP surface can forward
/// them untouched.
#[async_trait]
pub trait Tracker: Send + Sync {
    async fn board_sprints(&self, board_id: u64) -> Result<Vec<Value>, Error>;
    async fn sprint_issues(&self, sprint_id: u64) -> Result<Vec<Value>, Error>;
}

pub struct JiraClient {
    base_url: String,
    auth_header: String,
    client: reqwest::Client,
}

impl JiraClient {
    pub fn new(base_url: String, username: String, api_token: String) -> Self {
        let creds = format!("{username}:{api_token}");
        let encoded = base64::engine::general_purpose::STANDARD.encode(creds);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: format!("Basic {encoded}"),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
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

#[derive(Deserialize)]
struct SprintPage {
    values: Vec<Value>,
}

#[derive(Deserialize)]
struct IssuePage {
    issues: Vec<Value>,
}

#[async_trait]
impl Tracker for JiraClient {
    async fn board_sprints(&self, board_id: u64) -> Result<Vec<Value>, Error> {
        // Fixed offset, single page. Sprints beyond this page are invisible,
        // matching the upstream contract callers already depend on.
        let url = format!("{}/rest/agile/1.0/board/{board_id}/sprint", self.base_url);
        let page: SprintPage = self
            .get_json(&url, &[("startAt", "50"), ("state", "closed,active")])
            .await?;
        Ok(page.values)
    }

    async fn sprint_issues(&self, sprint_id: u64) -> Result<Vec<Value>, Error> {
        let url = format!("{}/rest/agile/1.0/sprint/{sprint_id}/issue", self.base_url);
        let page: IssuePage = self.get_json(&url, &[]).await?;
        Ok(page.issues)
    }
}
