//! Core data model — career analyses and the full comparison record.
//!
//! Both entities are built together as the atomic output of one comparison
//! request and are immutable after construction. There is no persistence and
//! no identifiers; a result lives only for one comparison-and-display cycle.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Schema-level validation failures. Raised during construction or
/// reconstruction; never silently corrected.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("pros must be a list with exactly 3 items, got {0}")]
    WrongProsCount(usize),

    #[error("cons must be a list with exactly 3 items, got {0}")]
    WrongConsCount(usize),

    #[error("decision guide must be a list with at least 2 guidance statements, got {0}")]
    DecisionGuideTooShort(usize),

    #[error("salary must be 'low', 'medium', or 'high', got: {0}")]
    InvalidSalaryTier(String),

    #[error("malformed comparison payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Canonical salary tier. Serializes as lower-case `"low"/"medium"/"high"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryTier {
    Low,
    Medium,
    High,
}

impl SalaryTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryTier::Low => "low",
            SalaryTier::Medium => "medium",
            SalaryTier::High => "high",
        }
    }
}

impl fmt::Display for SalaryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive match against the three canonical tokens — the strict
/// gate used by the response parser. Anything else is rejected here; lenient
/// free-text handling lives in `referee::salary`, not in this type.
impl FromStr for SalaryTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("low") {
            Ok(SalaryTier::Low)
        } else if s.eq_ignore_ascii_case("medium") {
            Ok(SalaryTier::Medium)
        } else if s.eq_ignore_ascii_case("high") {
            Ok(SalaryTier::High)
        } else {
            Err(ValidationError::InvalidSalaryTier(s.to_string()))
        }
    }
}

/// One career's analysis.
///
/// `pros` and `cons` hold exactly 3 items each — `new` rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerInfo {
    pub overview: String,
    pub skills: String,
    pub salary: SalaryTier,
    pub time_to_enter: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl CareerInfo {
    pub fn new(
        overview: String,
        skills: String,
        salary: SalaryTier,
        time_to_enter: String,
        pros: Vec<String>,
        cons: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if pros.len() != 3 {
            return Err(ValidationError::WrongProsCount(pros.len()));
        }
        if cons.len() != 3 {
            return Err(ValidationError::WrongConsCount(cons.len()));
        }
        Ok(CareerInfo {
            overview,
            skills,
            salary,
            time_to_enter,
            pros,
            cons,
        })
    }
}

/// The full comparison output: two careers plus a decision guide.
///
/// By convention `decision_guide[0]` favors career_a and `decision_guide[1]`
/// favors career_b; any further elements are neutral guidance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub career_a: CareerInfo,
    pub career_b: CareerInfo,
    pub decision_guide: Vec<String>,
}

// Deserialization side of the round trip. Salary arrives as a string and is
// re-validated through `SalaryTier::from_str`; list invariants are re-checked
// by the constructors.
#[derive(Deserialize)]
struct RawCareerInfo {
    overview: String,
    skills: String,
    salary: String,
    time_to_enter: String,
    pros: Vec<String>,
    cons: Vec<String>,
}

#[derive(Deserialize)]
struct RawComparison {
    career_a: RawCareerInfo,
    career_b: RawCareerInfo,
    decision_guide: Vec<String>,
}

impl TryFrom<RawCareerInfo> for CareerInfo {
    type Error = ValidationError;

    fn try_from(raw: RawCareerInfo) -> Result<Self, Self::Error> {
        CareerInfo::new(
            raw.overview,
            raw.skills,
            raw.salary.parse()?,
            raw.time_to_enter,
            raw.pros,
            raw.cons,
        )
    }
}

impl ComparisonResult {
    pub fn new(
        career_a: CareerInfo,
        career_b: CareerInfo,
        decision_guide: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if decision_guide.len() < 2 {
            return Err(ValidationError::DecisionGuideTooShort(decision_guide.len()));
        }
        Ok(ComparisonResult {
            career_a,
            career_b,
            decision_guide,
        })
    }

    /// Dictionary form with the keys `career_a`, `career_b`, `decision_guide`
    /// — the shape handed to the presentation layer.
    pub fn to_value(&self) -> Value {
        json!({
            "career_a": self.career_a,
            "career_b": self.career_b,
            "decision_guide": self.decision_guide,
        })
    }

    /// Reconstructs a result from its dictionary form, re-validating every
    /// invariant on the way in.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let raw: RawComparison = serde_json::from_value(value)?;
        ComparisonResult::new(
            raw.career_a.try_into()?,
            raw.career_b.try_into()?,
            raw.decision_guide,
        )
    }
}
