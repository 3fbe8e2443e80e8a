use crate::core::{CompletionClient, ProviderConfig};
use crate::utils::error::{PlannerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions client (Groq by default).
pub struct GroqClient<C: ProviderConfig> {
    config: C,
    client: Client,
}

impl<C: ProviderConfig> GroqClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url().trim_end_matches('/'))
    }
}

#[async_trait]
impl<C: ProviderConfig> CompletionClient for GroqClient<C> {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!("POST {} (model {})", self.endpoint(), model);
        let mut request = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.config.api_key())
            .json(&body);

        if let Some(timeout) = self.config.timeout_seconds() {
            request = request.timeout(std::time::Duration::from_secs(timeout));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Completion API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlannerError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| PlannerError::MalformedUpstream {
                message: "response contained no choices".to_string(),
            })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use httpmock::prelude::*;
    use serde_json::json;

    struct MockConfig {
        base_url: String,
    }

    impl ProviderConfig for MockConfig {
        fn api_key(&self) -> &str {
            "test-key"
        }

        fn model(&self) -> &str {
            "llama-3.3-70b-versatile"
        }

        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn timeout_seconds(&self) -> Option<u64> {
            Some(5)
        }
    }

    fn client_for(server: &MockServer) -> GroqClient<MockConfig> {
        GroqClient::new(MockConfig {
            base_url: server.url("/openai/v1"),
        })
    }

    #[tokio::test]
    async fn test_complete_sends_single_user_message() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/openai/v1/chat/completions")
                .header("authorization", "Bearer test-key")
                .json_body(json!({
                    "model": "llama-3.3-70b-versatile",
                    "messages": [{"role": "user", "content": "Привет\n\n{}"}]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "choices": [{"index": 0, "message": {"role": "assistant", "content": "{\"a\": 1}"}}]
                }));
        });

        let text = client_for(&server)
            .complete("llama-3.3-70b-versatile", "Привет\n\n{}")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(text, "{\"a\": 1}");
    }

    #[tokio::test]
    async fn test_null_content_becomes_empty_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/openai/v1/chat/completions");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"choices": [{"message": {"role": "assistant", "content": null}}]}));
        });

        let text = client_for(&server).complete("m", "p").await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_error_status_is_reported_with_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/openai/v1/chat/completions");
            then.status(401).body("invalid api key");
        });

        let err = client_for(&server).complete("m", "p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        match err {
            PlannerError::UpstreamStatus { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_choices_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/openai/v1/chat/completions");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"choices": []}));
        });

        let err = client_for(&server).complete("m", "p").await.unwrap_err();
        assert!(matches!(err, PlannerError::MalformedUpstream { .. }));
    }
}
