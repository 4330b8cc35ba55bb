use serde::{Deserialize, Serialize};

use crate::prelude::*;

use super::config::GeneratorConfig;

/// Persona instruction sent as the system message on every request.
pub const SYSTEM_PROMPT: &str = "You are an expert C++ developer and test writer.";

/// Narrow seam over the remote completion service.
///
/// The orchestrator is generic over this trait so tests can run against a
/// deterministic stub instead of the network.
#[allow(async_fn_in_trait)]
pub trait CompletionBackend {
    /// Submit one templated request and return the generated text.
    async fn complete(&self, user_message: &str) -> Result<String, Error>;
}

// HTTP request / response types (OpenAI-compatible chat completions API)

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for the GitHub Models chat-completion endpoint.
pub struct GithubModelsClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

impl GithubModelsClient {
    /// Temperature submitted with every request.
    const TEMPERATURE: f32 = 0.2;

    /// Top-p submitted with every request.
    const TOP_P: f32 = 1.0;

    /// Create an authenticated client with Bearer auth headers.
    ///
    /// No request timeout is set; the client library's default applies.
    pub fn new(config: &GeneratorConfig) -> Result<Self, Error> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_token))
                .map_err(|e| Error::Credential(format!("Invalid header value: {e}")))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Completion(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn build_messages(user_message: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_message.to_string(),
            },
        ]
    }
}

impl CompletionBackend for GithubModelsClient {
    async fn complete(&self, user_message: &str) -> Result<String, Error> {
        let url = format!("{}/chat/completions", self.endpoint);

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(user_message),
            temperature: Self::TEMPERATURE,
            top_p: Self::TOP_P,
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Completion(format!("Request to '{url}' failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Completion(format!(
                "Completion endpoint returned [{status}]: {body}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Completion(format!("Failed to parse completion response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Completion("Response contained no choices".to_string()))
    }
}
