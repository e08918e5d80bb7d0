#![allow(dead_code)]

// All LLM prompt constants for the referee. Every provider sends the same
// comparison prompt; only transport details differ per backend.

/// System prompt establishing neutrality for chat-style backends.
pub const REFEREE_SYSTEM: &str =
    "You are a neutral career referee. Provide objective career comparisons in JSON format.";

/// Comparison prompt template. Replace `{career_a}` and `{career_b}` before
/// sending — the names land in the instruction line and in both
/// decision-guide placeholders.
pub const COMPARISON_PROMPT_TEMPLATE: &str = r#"Compare careers: {career_a} vs {career_b}

Rules: Neutral comparison, no recommendations, simple language
Output JSON format:
{
  "career_a": {
    "overview": "2-line summary",
    "skills": "required skills",
    "salary": "low/medium/high",
    "time_to_enter": "time needed",
    "pros": ["advantage1", "advantage2", "advantage3"],
    "cons": ["disadvantage1", "disadvantage2", "disadvantage3"]
  },
  "career_b": {
    "overview": "2-line summary",
    "skills": "required skills",
    "salary": "low/medium/high",
    "time_to_enter": "time needed",
    "pros": ["advantage1", "advantage2", "advantage3"],
    "cons": ["disadvantage1", "disadvantage2", "disadvantage3"]
  },
  "decision_guide": [
    "Choose {career_a} if...",
    "Choose {career_b} if..."
  ]
}

Focus on trade-offs, not superiority. Be concise."#;

/// Builds the shared comparison prompt with both career names interpolated
/// verbatim.
pub fn build_comparison_prompt(career_a: &str, career_b: &str) -> String {
    COMPARISON_PROMPT_TEMPLATE
        .replace("{career_a}", career_a)
        .replace("{career_b}", career_b)
}
