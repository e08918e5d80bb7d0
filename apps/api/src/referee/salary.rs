//! Salary normalization — maps free-text salary descriptions to a tier.
//!
//! Model output is free text; this keeps the displayed tier robust without
//! requiring the model to follow instructions exactly. `normalize` is total:
//! it never fails, falling back to `Medium` when nothing matches.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::comparison::SalaryTier;

fn low_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(low|poor|minimal|entry|junior|starting|below|under)\b")
            .expect("low keyword pattern is valid")
    })
}

fn high_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(high|excellent|premium|senior|executive|above|over|top)\b")
            .expect("high keyword pattern is valid")
    })
}

fn medium_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(medium|average|moderate|mid|middle|fair|decent|competitive)\b")
            .expect("medium keyword pattern is valid")
    })
}

fn figure_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{1,3}(?:,\d{3})+|\d+)\s*(k\b)?").expect("figure pattern is valid")
    })
}

/// Extracts the first numeric figure from lower-cased salary text.
/// Commas are stripped and a trailing `k` scales by 1000, so `"$45,000"`,
/// `"45k"` and bare `"45"` yield 45 000, 45 000 and 45 respectively.
fn extract_figure(text: &str) -> Option<u64> {
    let caps = figure_pattern().captures(text)?;
    let digits: String = caps[1].chars().filter(|c| c.is_ascii_digit()).collect();
    let value: u64 = digits.parse().ok()?;
    if caps.get(2).is_some() {
        Some(value.saturating_mul(1000))
    } else {
        Some(value)
    }
}

/// Maps an arbitrary salary description to one of the three tiers.
///
/// Rule groups are evaluated in order — low, then high, then medium — and
/// the first hit wins. The high-band numeric check (80 000–99 999) runs
/// before the medium band on purpose: an `$85,000` figure is high, not
/// medium. That tie-break is part of the contract; do not reorder.
pub fn normalize(raw: &str) -> SalaryTier {
    let text = raw.trim().to_lowercase();
    if text.is_empty() {
        return SalaryTier::Medium;
    }

    // Exact canonical tokens short-circuit the rule groups.
    if let Ok(tier) = text.parse::<SalaryTier>() {
        return tier;
    }

    let figure = extract_figure(&text);

    if low_keywords().is_match(&text) || figure.is_some_and(|n| n < 60_000) {
        return SalaryTier::Low;
    }

    if high_keywords().is_match(&text)
        || figure.is_some_and(|n| n >= 100_000 || (80_000..100_000).contains(&n))
    {
        return SalaryTier::High;
    }

    if medium_keywords().is_match(&text) || figure.is_some_and(|n| (60_000..100_000).contains(&n))
    {
        return SalaryTier::Medium;
    }

    SalaryTier::Medium
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::comparison::SalaryTier::{High, Low, Medium};

    #[test]
    fn test_empty_input_defaults_to_medium() {
        assert_eq!(normalize(""), Medium);
        assert_eq!(normalize("   "), Medium);
    }

    #[test]
    fn test_exact_tokens_pass_through() {
        assert_eq!(normalize("low"), Low);
        assert_eq!(normalize("medium"), Medium);
        assert_eq!(normalize("high"), High);
    }

    #[test]
    fn test_exact_tokens_trimmed_and_case_folded() {
        assert_eq!(normalize("  High "), High);
        assert_eq!(normalize("MEDIUM"), Medium);
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical_tiers() {
        for tier in ["low", "medium", "high"] {
            let once = normalize(tier);
            assert_eq!(normalize(once.as_str()), once);
        }
    }

    #[test]
    fn test_low_keywords() {
        assert_eq!(normalize("entry level pay"), Low);
        assert_eq!(normalize("junior salary"), Low);
        assert_eq!(normalize("below market rate"), Low);
        assert_eq!(normalize("starting wage"), Low);
    }

    #[test]
    fn test_high_keywords() {
        assert_eq!(normalize("excellent compensation"), High);
        assert_eq!(normalize("senior level package"), High);
        assert_eq!(normalize("premium pay"), High);
        assert_eq!(normalize("above average"), High);
    }

    #[test]
    fn test_medium_keywords() {
        assert_eq!(normalize("competitive salary"), Medium);
        assert_eq!(normalize("fair compensation"), Medium);
        assert_eq!(normalize("moderate pay"), Medium);
    }

    #[test]
    fn test_figures_under_60k_are_low() {
        assert_eq!(normalize("$45,000"), Low);
        assert_eq!(normalize("45k"), Low);
        assert_eq!(normalize("45"), Low);
        assert_eq!(normalize("around $59,999 per year"), Low);
    }

    #[test]
    fn test_figures_in_60_to_80k_band_are_medium() {
        assert_eq!(normalize("$60,000"), Medium);
        assert_eq!(normalize("75k"), Medium);
        assert_eq!(normalize("roughly 79,000 a year"), Medium);
    }

    #[test]
    fn test_high_band_overrides_medium_band() {
        // 80k-99k sits inside the nominal medium band but resolves high
        // because the high group is evaluated first.
        assert_eq!(normalize("$85,000"), High);
        assert_eq!(normalize("99k"), High);
        assert_eq!(normalize("80,000"), High);
    }

    #[test]
    fn test_figures_at_100k_and_above_are_high() {
        assert_eq!(normalize("$100,000"), High);
        assert_eq!(normalize("120k"), High);
        assert_eq!(normalize("$250,000 total comp"), High);
    }

    #[test]
    fn test_low_group_wins_over_later_groups() {
        // "entry" hits the low group before the figure reaches the high group.
        assert_eq!(normalize("entry role paying $120,000"), Low);
    }

    #[test]
    fn test_unrecognized_text_defaults_to_medium() {
        assert_eq!(normalize("depends on the region"), Medium);
        assert_eq!(normalize("varies widely"), Medium);
    }

    #[test]
    fn test_extract_figure_shapes() {
        assert_eq!(extract_figure("$45,000"), Some(45_000));
        assert_eq!(extract_figure("45k"), Some(45_000));
        assert_eq!(extract_figure("45"), Some(45));
        assert_eq!(extract_figure("no numbers here"), None);
        assert_eq!(extract_figure("between 80,000 and 95,000"), Some(80_000));
    }
}
