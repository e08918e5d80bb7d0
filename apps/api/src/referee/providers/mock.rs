//! Deterministic mock adapter — the guaranteed-success terminal case of the
//! fallback chain. Pure, no I/O, always available.

use async_trait::async_trait;

use crate::models::comparison::{CareerInfo, ComparisonResult, SalaryTier, ValidationError};
use crate::referee::providers::{CareerProvider, ProviderError};

pub struct MockProvider;

/// Synthesizes a fixed-shape comparison referencing both career names
/// verbatim, with canned text and `medium` tiers.
pub fn mock_comparison(
    career_a: &str,
    career_b: &str,
) -> Result<ComparisonResult, ValidationError> {
    let career_a_info = CareerInfo::new(
        format!(
            "{career_a} involves specialized skills and offers various career paths. \
             This field typically requires dedicated learning and practice."
        ),
        format!(
            "Core skills for {career_a} include problem-solving, communication, \
             and domain-specific technical abilities."
        ),
        SalaryTier::Medium,
        "2-4 years".to_string(),
        vec![
            "Growing field".to_string(),
            "Good opportunities".to_string(),
            "Skill development".to_string(),
        ],
        vec![
            "Learning curve".to_string(),
            "Competition".to_string(),
            "Constant updates".to_string(),
        ],
    )?;

    let career_b_info = CareerInfo::new(
        format!(
            "{career_b} offers unique opportunities and challenges. \
             This career path has its own requirements and growth potential."
        ),
        format!(
            "Essential skills for {career_b} include analytical thinking, creativity, \
             and relevant technical knowledge."
        ),
        SalaryTier::Medium,
        "2-4 years".to_string(),
        vec![
            "Diverse opportunities".to_string(),
            "Creative work".to_string(),
            "Professional growth".to_string(),
        ],
        vec![
            "Market variability".to_string(),
            "Skill requirements".to_string(),
            "Time investment".to_string(),
        ],
    )?;

    ComparisonResult::new(
        career_a_info,
        career_b_info,
        vec![
            format!(
                "Choose {career_a} if you prefer structured problem-solving and technical challenges"
            ),
            format!("Choose {career_b} if you value creativity and diverse project opportunities"),
        ],
    )
}

#[async_trait]
impl CareerProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn attempt(
        &self,
        career_a: &str,
        career_b: &str,
    ) -> Result<ComparisonResult, ProviderError> {
        Ok(mock_comparison(career_a, career_b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_references_both_names_verbatim() {
        let result = mock_comparison("Nurse", "Teacher").unwrap();
        assert!(result.career_a.overview.contains("Nurse"));
        assert!(result.career_b.overview.contains("Teacher"));
        assert!(result.decision_guide[0].contains("Nurse"));
        assert!(result.decision_guide[1].contains("Teacher"));
    }

    #[test]
    fn test_mock_shape_is_valid() {
        let result = mock_comparison("A", "B").unwrap();
        assert_eq!(result.career_a.pros.len(), 3);
        assert_eq!(result.career_a.cons.len(), 3);
        assert_eq!(result.career_b.pros.len(), 3);
        assert_eq!(result.career_b.cons.len(), 3);
        assert_eq!(result.decision_guide.len(), 2);
    }

    #[test]
    fn test_mock_tiers_are_medium() {
        let result = mock_comparison("A", "B").unwrap();
        assert_eq!(result.career_a.salary, SalaryTier::Medium);
        assert_eq!(result.career_b.salary, SalaryTier::Medium);
    }

    #[tokio::test]
    async fn test_mock_provider_is_always_available() {
        assert!(MockProvider.is_available().await);
    }

    #[tokio::test]
    async fn test_mock_provider_attempt_never_fails() {
        let result = MockProvider.attempt("Chef", "Pilot").await.unwrap();
        assert!(result.career_a.overview.contains("Chef"));
    }
}
