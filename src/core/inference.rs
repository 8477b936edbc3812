//! Accessibility inference: a pure request builder, an I/O boundary behind
//! [`CompletionService`], and a pure interpreter for the completion text.

use crate::core::prompt::populate_prompt;
use crate::domain::model::{
    AccessInfo, ChatMessage, CompletionRequest, InferenceFailure, InferenceOutcome,
};
use crate::domain::ports::CompletionService;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 3000;
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_TOP_P: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

pub fn build_completion_request(prompt: &str, settings: &InferenceSettings) -> CompletionRequest {
    CompletionRequest {
        model: settings.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
        top_p: settings.top_p,
    }
}

/// Removes every ```` ```json ```` and ```` ``` ```` marker, then trims.
pub fn sanitize_completion(content: &str) -> String {
    content.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn interpret_completion(content: &str) -> InferenceOutcome {
    let sanitized = sanitize_completion(content);
    // An empty completion reads as an empty object.
    let source = if sanitized.is_empty() { "{}" } else { sanitized.as_str() };

    match serde_json::from_str::<AccessInfo>(source) {
        Ok(info) => InferenceOutcome::Inferred(info),
        Err(e) => {
            tracing::warn!("Failed to parse completion as JSON: {}", e);
            tracing::debug!("Sanitized content that failed parsing: {}", sanitized);
            InferenceOutcome::Failed(InferenceFailure::Unparsable { content: sanitized })
        }
    }
}

pub struct InferenceClient<S: CompletionService> {
    service: S,
    settings: InferenceSettings,
}

impl<S: CompletionService> InferenceClient<S> {
    pub fn new(service: S) -> Self {
        Self::with_settings(service, InferenceSettings::default())
    }

    pub fn with_settings(service: S, settings: InferenceSettings) -> Self {
        Self { service, settings }
    }

    pub fn settings(&self) -> &InferenceSettings {
        &self.settings
    }

    /// Sends one prompt and reads the reply. Never fails: every problem is
    /// reported through [`InferenceOutcome::Failed`].
    pub async fn infer(&self, prompt: &str) -> InferenceOutcome {
        let request = build_completion_request(prompt, &self.settings);

        match self.service.complete(&request).await {
            Ok(content) => {
                tracing::debug!("Raw completion: {}", content);
                interpret_completion(&content)
            }
            Err(failure) => InferenceOutcome::Failed(failure),
        }
    }

    pub async fn generate_access_info(&self, name: &str, address: &str) -> InferenceOutcome {
        let prompt = populate_prompt(name, address);
        let outcome = self.infer(&prompt).await;
        match &outcome {
            InferenceOutcome::Inferred(info) => {
                tracing::debug!("Generated access info for '{}': {:?}", name, info)
            }
            InferenceOutcome::Failed(failure) => {
                tracing::warn!("No access info for '{}': {}", name, failure)
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct ScriptedService {
        reply: std::result::Result<String, InferenceFailure>,
        requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl ScriptedService {
        fn replying(reply: std::result::Result<String, InferenceFailure>) -> Self {
            Self {
                reply,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedService {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> std::result::Result<String, InferenceFailure> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    #[test]
    fn test_build_completion_request_defaults() {
        let request = build_completion_request("hello", &InferenceSettings::default());

        assert_eq!(request.model, "gpt-4-turbo");
        assert_eq!(request.max_tokens, 3000);
        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.top_p, 1.0);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "hello");
    }

    #[test]
    fn test_sanitize_strips_code_fences() {
        let raw = "```json\n{\"hasElevator\": true}\n```";
        assert_eq!(sanitize_completion(raw), "{\"hasElevator\": true}");

        let bare = "```\n{}\n```";
        assert_eq!(sanitize_completion(bare), "{}");
    }

    #[test]
    fn test_interpret_valid_json() {
        let outcome = interpret_completion(
            "```json\n{\"isWheelchairAccessible\": true, \"comments\": \"רמפה בכניסה\"}\n```",
        );

        let info = outcome.access_info().unwrap();
        assert_eq!(info.is_wheelchair_accessible, Some(true));
        assert_eq!(info.comments.as_deref(), Some("רמפה בכניסה"));
        assert_eq!(info.has_elevator, None);
    }

    #[test]
    fn test_interpret_prose_is_unparsable() {
        let outcome = interpret_completion("Sorry, I have no information about this place.");

        match outcome {
            InferenceOutcome::Failed(InferenceFailure::Unparsable { content }) => {
                assert!(content.starts_with("Sorry"));
            }
            other => panic!("expected unparsable failure, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_empty_completion_is_empty_record() {
        let outcome = interpret_completion("  ");
        assert_eq!(outcome, InferenceOutcome::Inferred(AccessInfo::default()));
    }

    #[tokio::test]
    async fn test_generate_access_info_sends_one_request() {
        let service = ScriptedService::replying(Ok(r#"{"hasElevator": true}"#.to_string()));
        let client = InferenceClient::new(service.clone());

        let outcome = client.generate_access_info("Cafe", "Main St").await;

        assert_eq!(outcome.access_info().unwrap().has_elevator, Some(true));
        let requests = service.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].messages[0].content.contains("Cafe"));
        assert!(requests[0].messages[0].content.contains("Main St"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_returned_as_outcome() {
        let service = ScriptedService::replying(Err(InferenceFailure::Unauthorized));
        let client = InferenceClient::new(service);

        let outcome = client.generate_access_info("Cafe", "Main St").await;

        assert_eq!(outcome.failure(), Some(&InferenceFailure::Unauthorized));
    }

    #[tokio::test]
    async fn test_custom_settings_reach_the_request() {
        let service = ScriptedService::replying(Ok("{}".to_string()));
        let settings = InferenceSettings {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            temperature: 0.2,
            top_p: 0.9,
        };
        let client = InferenceClient::with_settings(service.clone(), settings);

        client.infer("prompt").await;

        let requests = service.requests.lock().unwrap();
        assert_eq!(requests[0].model, "gpt-4o-mini");
        assert_eq!(requests[0].max_tokens, 500);
    }
}
