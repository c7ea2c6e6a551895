//! OpenAI-compatible Chat Completions client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{CompletionRequest, CompletionResult, CompletionService, FinishReason, LlmError, OutputMode};

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Connection settings for [`LlmClient`], taken from `Config` at startup.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

/// The completion client injected into the pipeline at process start.
/// Retries 429 and 5xx responses with exponential backoff; everything past the
/// transport is the pipeline's business.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError> {
        let body = chat_request(&self.settings.model, request);
        let timeout = request.timeout().unwrap_or(self.settings.timeout);
        let url = self.endpoint();

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    task = request.task(),
                    "Completion attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.settings.api_key)
                .timeout(timeout)
                .json(&body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) if e.is_timeout() => return Err(LlmError::Timeout(timeout)),
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Completion API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let text = response.text().await?;
            let parsed: ChatResponse = serde_json::from_str(&text)?;
            return Ok(into_result(parsed, request.task()));
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

fn chat_request<'a>(model: &'a str, request: &'a CompletionRequest) -> ChatRequest<'a> {
    let response_format = match request.output_mode() {
        OutputMode::Json => Some(ResponseFormat {
            kind: "json_object",
        }),
        OutputMode::Plain | OutputMode::EmbeddedJson => None,
    };

    ChatRequest {
        model: request.model().unwrap_or(model),
        messages: vec![
            ChatMessage {
                role: "system",
                content: request.system(),
            },
            ChatMessage {
                role: "user",
                content: request.user(),
            },
        ],
        temperature: request.temperature(),
        max_tokens: request.max_tokens(),
        response_format,
    }
}

fn into_result(response: ChatResponse, task: &str) -> CompletionResult {
    if let Some(usage) = &response.usage {
        debug!(
            task,
            "Completion succeeded: prompt_tokens={}, completion_tokens={}",
            usage.prompt_tokens,
            usage.completion_tokens
        );
    }

    match response.choices.into_iter().next() {
        Some(choice) => CompletionResult {
            text: choice.message.content,
            finish_reason: FinishReason::from_wire(choice.finish_reason.as_deref()),
        },
        None => CompletionResult {
            text: None,
            finish_reason: FinishReason::Stop,
        },
    }
}
