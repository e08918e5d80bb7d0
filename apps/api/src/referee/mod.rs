//! Career Referee — orchestrates the provider fallback chain.
//!
//! Flow: ollama probe → ollama generate → openai (retried) → mock, first
//! success wins. Providers are tried strictly in that order, one at a time;
//! the mock terminal case cannot fail, so `compare` always returns a result
//! and the presentation layer never renders an error state for the
//! comparison step. Every successful result passes through the salary
//! normalizer before being returned.

pub mod parser;
pub mod prompts;
pub mod providers;
pub mod salary;

use tracing::{info, warn};

use crate::config::Config;
use crate::models::comparison::{CareerInfo, ComparisonResult, SalaryTier};
use crate::referee::providers::mock::MockProvider;
use crate::referee::providers::ollama::OllamaProvider;
use crate::referee::providers::openai::OpenAiProvider;
use crate::referee::providers::CareerProvider;

pub struct CareerReferee {
    providers: Vec<Box<dyn CareerProvider>>,
}

impl CareerReferee {
    /// Assembles the standard chain in priority order: local inference
    /// first (cheapest), hosted API second, mock last.
    pub fn from_config(config: &Config) -> Self {
        CareerReferee::with_providers(vec![
            Box::new(OllamaProvider::new(config.ollama_url.clone())),
            Box::new(OpenAiProvider::new(config.openai_api_key.clone())),
            Box::new(MockProvider),
        ])
    }

    /// Custom provider chain, used by tests.
    pub fn with_providers(providers: Vec<Box<dyn CareerProvider>>) -> Self {
        CareerReferee { providers }
    }

    /// Compares two careers. Never fails: providers whose preconditions
    /// aren't met are skipped, errors are logged and the chain continues,
    /// and a canned fallback covers the case where every provider errs.
    pub async fn compare(&self, career_a: &str, career_b: &str) -> ComparisonResult {
        for provider in &self.providers {
            if !provider.is_available().await {
                info!("provider {} unavailable, skipping", provider.name());
                continue;
            }

            info!("using {} for career analysis", provider.name());
            match provider.attempt(career_a, career_b).await {
                Ok(result) => return normalize_result(result),
                Err(e) => warn!("provider {} failed: {e}", provider.name()),
            }
        }

        warn!("all providers failed, returning canned fallback");
        fallback_comparison()
    }
}

/// Second normalization pass over an already-validated result. Applied to
/// every successful result regardless of provider; idempotent on tiers the
/// strict parse gate has already collapsed to canonical tokens.
fn normalize_result(mut result: ComparisonResult) -> ComparisonResult {
    result.career_a.salary = salary::normalize(result.career_a.salary.as_str());
    result.career_b.salary = salary::normalize(result.career_b.salary.as_str());
    result
}

/// Last-resort canned result for the case where every provider in the
/// chain, mock included, has failed.
fn fallback_comparison() -> ComparisonResult {
    let unavailable = CareerInfo {
        overview: "Career analysis is currently unavailable. Please try again with different inputs."
            .to_string(),
        skills: "Analysis unavailable".to_string(),
        salary: SalaryTier::Medium,
        time_to_enter: "Unknown".to_string(),
        pros: vec![
            "Please".to_string(),
            "try".to_string(),
            "again".to_string(),
        ],
        cons: vec![
            "Analysis".to_string(),
            "error".to_string(),
            "occurred".to_string(),
        ],
    };

    ComparisonResult {
        career_a: unavailable.clone(),
        career_b: unavailable,
        decision_guide: vec![
            "Analysis failed: no provider produced a comparison".to_string(),
            "Please check your inputs and try again".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referee::providers::ProviderError;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl CareerProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn attempt(&self, _: &str, _: &str) -> Result<ComparisonResult, ProviderError> {
            Err(ProviderError::AllModelsFailed)
        }
    }

    struct UnavailableProvider;

    #[async_trait]
    impl CareerProvider for UnavailableProvider {
        fn name(&self) -> &'static str {
            "unavailable"
        }

        async fn is_available(&self) -> bool {
            false
        }

        async fn attempt(&self, _: &str, _: &str) -> Result<ComparisonResult, ProviderError> {
            panic!("attempt must not be called on an unavailable provider");
        }
    }

    fn no_backend_config() -> Config {
        Config {
            // Port 1 is reserved; the reachability probe fails immediately.
            ollama_url: "http://127.0.0.1:1".to_string(),
            openai_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_falls_through_to_mock_when_no_backend_is_configured() {
        let referee = CareerReferee::from_config(&no_backend_config());
        let result = referee.compare("Nurse", "Teacher").await;

        assert!(result.career_a.overview.contains("Nurse"));
        assert!(result.career_b.overview.contains("Teacher"));
        assert_eq!(result.career_a.salary, SalaryTier::Medium);
        assert_eq!(result.career_b.salary, SalaryTier::Medium);
    }

    #[tokio::test]
    async fn test_end_to_end_mock_result_shape() {
        let referee = CareerReferee::from_config(&no_backend_config());
        let result = referee.compare("Nurse", "Teacher").await;

        assert_eq!(result.decision_guide.len(), 2);
        assert_eq!(result.career_a.pros.len(), 3);
        assert_eq!(result.career_a.cons.len(), 3);
        assert_eq!(result.career_b.pros.len(), 3);
        assert_eq!(result.career_b.cons.len(), 3);
    }

    #[tokio::test]
    async fn test_failing_provider_falls_through_to_mock() {
        let referee = CareerReferee::with_providers(vec![
            Box::new(FailingProvider),
            Box::new(MockProvider),
        ]);
        let result = referee.compare("Chef", "Pilot").await;
        assert!(result.career_a.overview.contains("Chef"));
    }

    #[tokio::test]
    async fn test_unavailable_provider_is_skipped_not_attempted() {
        let referee = CareerReferee::with_providers(vec![
            Box::new(UnavailableProvider),
            Box::new(MockProvider),
        ]);
        let result = referee.compare("Chef", "Pilot").await;
        assert!(result.career_b.overview.contains("Pilot"));
    }

    #[tokio::test]
    async fn test_canned_fallback_when_every_provider_fails() {
        let referee = CareerReferee::with_providers(vec![
            Box::new(FailingProvider),
            Box::new(FailingProvider),
        ]);
        let result = referee.compare("Chef", "Pilot").await;

        assert!(result.career_a.overview.contains("unavailable"));
        assert_eq!(result.career_a.pros.len(), 3);
        assert_eq!(result.decision_guide.len(), 2);
    }

    #[tokio::test]
    async fn test_successful_result_is_normalized() {
        let result = CareerReferee::with_providers(vec![Box::new(MockProvider)])
            .compare("A", "B")
            .await;
        // Mock tiers are already canonical; the pass must keep them intact.
        assert_eq!(result.career_a.salary, SalaryTier::Medium);
        assert_eq!(result.career_b.salary, SalaryTier::Medium);
    }
}
