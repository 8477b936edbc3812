use crate::domain::model::{CompletionRequest, InferenceFailure};
use crate::domain::ports::CompletionService;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Chat Completions client for the OpenAI API.
pub struct OpenAiClient {
    api_key: Option<String>,
    endpoint: String,
    client: Client,
}

impl OpenAiClient {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> std::result::Result<String, InferenceFailure> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!("No OpenAI API key configured");
            return Err(InferenceFailure::Unauthorized);
        };

        tracing::debug!(
            "Requesting completion from {} ({})",
            self.completions_url(),
            request.model
        );
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error with OpenAI API: {}", e);
                InferenceFailure::Transport(e.to_string())
            })?;

        let status = response.status();
        tracing::debug!("OpenAI response status: {}", status);
        match status {
            StatusCode::UNAUTHORIZED => {
                tracing::error!("Invalid API key. Please verify your OpenAI API key.");
                return Err(InferenceFailure::Unauthorized);
            }
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::error!(
                    "Rate limit exceeded or credit limit reached. Check your OpenAI account."
                );
                return Err(InferenceFailure::RateLimited);
            }
            s if !s.is_success() => {
                tracing::error!("OpenAI API returned status {}", s);
                return Err(InferenceFailure::Status { code: s.as_u16() });
            }
            _ => {}
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Unreadable OpenAI response body: {}", e);
            InferenceFailure::Transport(e.to_string())
        })?;

        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
