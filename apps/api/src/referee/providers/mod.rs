//! Provider adapters — interchangeable backends behind one contract.
//!
//! Each adapter either produces a validated `ComparisonResult` or fails with
//! a `ProviderError`; the orchestrator treats every failure as recoverable
//! and moves on to the next adapter in the chain.

pub mod mock;
pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::models::comparison::{ComparisonResult, ValidationError};
use crate::referee::parser::ParseError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("no API key configured")]
    MissingCredential,

    #[error("all candidate models failed")]
    AllModelsFailed,

    #[error("backend returned empty content")]
    EmptyContent,

    #[error("retries exhausted after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A backend capable of producing a career comparison.
///
/// `is_available` is a cheap synchronous-in-spirit precondition probe
/// (endpoint reachability, credential presence) executed before `attempt`;
/// an unavailable provider is skipped without counting as a failure.
#[async_trait]
pub trait CareerProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn is_available(&self) -> bool;

    async fn attempt(
        &self,
        career_a: &str,
        career_b: &str,
    ) -> Result<ComparisonResult, ProviderError>;
}

/// Retry/backoff policy for backends that are worth retrying.
///
/// Delay before retrying attempt `n+1` is `base_delay * 2^n` plus a jitter
/// in `[0, max_jitter)`. The delay computation is pure so tests never sleep;
/// callers sample the jitter fraction themselves.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_jitter: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after failed attempt `attempt` (0-based).
    /// `jitter_fraction` is expected in `[0, 1)` and scales `max_jitter`.
    pub fn backoff_delay(&self, attempt: u32, jitter_fraction: f64) -> Duration {
        let exponential = self.base_delay.saturating_mul(1u32 << attempt.min(16));
        exponential + self.max_jitter.mul_f64(jitter_fraction.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_delay(0, 0.0), Duration::from_secs(1));
        assert_eq!(policy.backoff_delay(1, 0.0), Duration::from_secs(2));
        assert_eq!(policy.backoff_delay(2, 0.0), Duration::from_secs(4));
    }

    #[test]
    fn test_jitter_stays_within_bound() {
        let policy = RetryPolicy::default();
        let delay = policy.backoff_delay(0, 0.999);
        assert!(delay >= Duration::from_secs(1));
        assert!(delay < Duration::from_secs(2));
    }

    #[test]
    fn test_custom_policy_is_respected() {
        let policy = RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
            max_jitter: Duration::from_millis(50),
        };
        assert_eq!(policy.backoff_delay(3, 0.0), Duration::from_millis(800));
        assert!(policy.backoff_delay(0, 0.5) >= Duration::from_millis(100));
        assert!(policy.backoff_delay(0, 0.5) < Duration::from_millis(150));
    }

    #[test]
    fn test_jitter_fraction_is_clamped() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_delay(0, -1.0), Duration::from_secs(1));
        assert!(policy.backoff_delay(0, 7.5) <= Duration::from_secs(2));
    }
}
