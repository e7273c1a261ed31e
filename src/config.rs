use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::team::Team;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub jira: JiraConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Deserialize, Default)]
pub struct JiraConfig {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub api_token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ServerConfig {
    pub port: Option<u16>,
    /// Where the TUI reaches the intermediary service. Defaults to
    /// `http://localhost:{port}`.
    pub api_url: Option<String>,
}

impl AppConfig {
    /// Tracking API credentials: (base_url, username, api_token).
    /// Environment variables win over the config file.
    pub fn jira_credentials(&self) -> Result<(String, String, String)> {
        let base_url = env_or("JIRA_BASE_URL", &self.jira.base_url)
            .context("Jira base URL not set (JIRA_BASE_URL or [jira] base_url)")?;
        let username = env_or("JIRA_USERNAME", &self.jira.username)
            .context("Jira username not set (JIRA_USERNAME or [jira] username)")?;
        let api_token = env_or("JIRA_ACCESS_TOKEN", &self.jira.api_token)
            .context("Jira access token not set (JIRA_ACCESS_TOKEN or [jira] api_token)")?;
        Ok((base_url, username, api_token))
    }

    pub fn openai_api_key(&self) -> Result<String> {
        env_or("OPENAI_API_KEY", &self.openai.api_key)
            .context("OpenAI API key not set (OPENAI_API_KEY or [openai] api_key)")
    }

    pub fn model(&self) -> String {
        self.openai
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn port(&self) -> Result<u16> {
        match std::env::var("PORT") {
            Ok(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}")),
            _ => Ok(self.server.port.unwrap_or(DEFAULT_PORT)),
        }
    }

    pub fn api_url(&self) -> Result<String> {
        if let Some(url) = &self.server.api_url {
            return Ok(url.trim_end_matches('/').to_string());
        }
        Ok(format!("http://localhost:{}", self.port()?))
    }
}

fn env_or(var: &str, file_value: &Option<String>) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| file_value.clone())
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".recap")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[jira]
base_url = "https://example.atlassian.net"
username = "user@example.com"
api_token = "secret"

[openai]
api_key = "sk-test"
model = "gpt-4o"

[server]
port = 4000

[[teams]]
name = "Team Business"
board_id = 139

[[teams]]
name = "Team Process"
board_id = 138
"#;

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(
            config.jira.base_url.as_deref(),
            Some("https://example.atlassian.net")
        );
        assert_eq!(config.openai.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.server.port, Some(4000));
        assert_eq!(config.teams.len(), 2);
        assert_eq!(config.teams[0].name, "Team Business");
        assert_eq!(config.teams[0].board_id, 139);
    }

    #[test]
    fn model_defaults_when_unset() {
        let config = AppConfig::default();
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn api_url_derived_from_port() {
        let config: AppConfig = toml::from_str("[server]\nport = 4000\n").unwrap();
        assert_eq!(config.api_url().unwrap(), "http://localhost:4000");
    }

    #[test]
    fn api_url_override_trims_trailing_slash() {
        let config: AppConfig =
            toml::from_str("[server]\napi_url = \"http://recap.internal:9000/\"\n").unwrap();
        assert_eq!(config.api_url().unwrap(), "http://recap.internal:9000");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.teams.is_empty());
        assert!(config.jira.base_url.is_none());
    }

    #[test]
    fn loads_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.teams[1].board_id, 138);
    }
}
