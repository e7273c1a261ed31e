use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::Error;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The upstream transport enforces no timeout of its own, so the request
/// carries a bounded one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Single-turn chat-completion client. No retries, no streaming: one failed
/// call surfaces as one `GenerationFailed`.
pub struct Summarizer {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl Summarizer {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    /// Submits the prompt as the sole user message and returns the first
    /// completion's text content unmodified (markdown).
    pub async fn summarize(&self, prompt: &str) -> Result<String, Error> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let resp = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::GenerationFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::GenerationFailed(format!(
                "completion request returned status {status}"
            )));
        }

        let completion: ChatCompletion = resp
            .json()
            .await
            .map_err(|e| Error::GenerationFailed(format!("failed to parse response: {e}")))?;

        first_choice(completion)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

fn first_choice(completion: ChatCompletion) -> Result<String, Error> {
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| Error::GenerationFailed("response contained no choices".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_choice_content() {
        let json = r###"{
            "id": "chatcmpl-123",
            "model": "gpt-4o-mini",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "## Sprint summary\n- stuff" }, "finish_reason": "stop" },
                { "index": 1, "message": { "role": "assistant", "content": "ignored" }, "finish_reason": "stop" }
            ]
        }"###;
        let completion: ChatCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(
            first_choice(completion).unwrap(),
            "## Sprint summary\n- stuff"
        );
    }

    #[test]
    fn empty_choices_is_generation_failure() {
        let completion: ChatCompletion = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = first_choice(completion).unwrap_err();
        assert!(matches!(err, Error::GenerationFailed(_)));
    }
}
