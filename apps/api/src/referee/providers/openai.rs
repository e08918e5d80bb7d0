//! Hosted-API adapter for OpenAI chat completions.
//!
//! Requires `OPENAI_API_KEY`; unavailable without it. Transient failures are
//! retried with exponential backoff plus jitter, and the last error is
//! propagated once the retry budget is spent.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::comparison::ComparisonResult;
use crate::referee::parser::parse_response;
use crate::referee::prompts::{build_comparison_prompt, REFEREE_SYSTEM};
use crate::referee::providers::{CareerProvider, ProviderError, RetryPolicy};
use async_trait::async_trait;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
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
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    retry: RetryPolicy,
}

impl OpenAiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        OpenAiProvider {
            client: Client::new(),
            api_key,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: REFEREE_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyContent)
    }
}

#[async_trait]
impl CareerProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn attempt(
        &self,
        career_a: &str,
        career_b: &str,
    ) -> Result<ComparisonResult, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;

        let prompt = build_comparison_prompt(career_a, career_b);
        let mut last_error: Option<ProviderError> = None;

        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                let delay = self.retry.backoff_delay(attempt - 1, rand::random::<f64>());
                warn!(
                    "OpenAI attempt {attempt} failed, retrying after {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.complete(api_key, &prompt).await {
                Ok(text) => {
                    debug!("OpenAI returned {} chars", text.len());
                    match parse_response(&text) {
                        Ok(result) => return Ok(result),
                        Err(e) => last_error = Some(ProviderError::Parse(e)),
                    }
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or(ProviderError::RetriesExhausted {
            attempts: self.retry.max_attempts,
        }))
    }
}
