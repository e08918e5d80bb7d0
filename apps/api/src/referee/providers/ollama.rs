//! Local-inference adapter for an Ollama server.
//!
//! Availability is a cheap `/api/tags` probe with a short timeout; the
//! actual generation call walks a fixed list of model identifiers until one
//! produces output that survives the response parser.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::comparison::ComparisonResult;
use crate::referee::parser::parse_response;
use crate::referee::prompts::build_comparison_prompt;
use crate::referee::providers::{CareerProvider, ProviderError};
use async_trait::async_trait;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Candidate models in order of preference.
const CANDIDATE_MODELS: &[&str] = &["llama3.1:8b", "llama3:8b", "llama2:7b", "mistral:7b"];

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);
const GENERATE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
    top_p: f64,
    num_predict: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        // Low sampling temperature for determinism
        GenerateOptions {
            temperature: 0.3,
            top_p: 0.9,
            num_predict: 800,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

pub struct OllamaProvider {
    client: Client,
    base_url: String,
}

impl OllamaProvider {
    pub fn new(base_url: String) -> Self {
        OllamaProvider {
            client: Client::new(),
            base_url,
        }
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .timeout(GENERATE_TIMEOUT)
            .json(&GenerateRequest {
                model,
                prompt,
                stream: false,
                options: GenerateOptions::default(),
            })
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

        let body: GenerateResponse = response.json().await?;
        Ok(body.response)
    }
}

#[async_trait]
impl CareerProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    async fn is_available(&self) -> bool {
        let probe = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;
        matches!(probe, Ok(response) if response.status().is_success())
    }

    async fn attempt(
        &self,
        career_a: &str,
        career_b: &str,
    ) -> Result<ComparisonResult, ProviderError> {
        let prompt = build_comparison_prompt(career_a, career_b);

        for model in CANDIDATE_MODELS {
            debug!("trying ollama model {model}");
            match self.generate(model, &prompt).await {
                Ok(text) => match parse_response(&text) {
                    Ok(result) => return Ok(result),
                    Err(e) => warn!("model {model} returned unusable output: {e}"),
                },
                Err(e) => warn!("model {model} failed: {e}"),
            }
        }

        Err(ProviderError::AllModelsFailed)
    }
}
