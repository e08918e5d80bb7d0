//! Response parsing — turns raw model text into a validated `ComparisonResult`.
//!
//! The model is asked for bare JSON but frequently wraps it in markdown
//! fences anyway, so a single leading/trailing fence is tolerated. Structure
//! is validated strictly: a response missing a key, carrying a malformed
//! career object, or using a salary spelling outside low/medium/high is
//! rejected whole — it never reaches the lenient salary normalizer, which
//! runs as a separate pass over already-validated data.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::comparison::{CareerInfo, ComparisonResult, SalaryTier, ValidationError};

const TOP_LEVEL_FIELDS: &[&str] = &["career_a", "career_b", "decision_guide"];
const CAREER_FIELDS: &[&str] = &[
    "overview",
    "skills",
    "salary",
    "time_to_enter",
    "pros",
    "cons",
];

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty response")]
    Empty,

    #[error("invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{career} must be an object")]
    CareerNotAnObject { career: String },

    #[error("missing fields in {career}: {}", .fields.join(", "))]
    MissingCareerFields { career: String, fields: Vec<String> },

    #[error("{field} in {career} must be a string")]
    NotAString { career: String, field: String },

    #[error("invalid salary format in {career}: {value}. Must be low/medium/high")]
    InvalidSalary { career: String, value: String },

    #[error("{field} in {career} must be a list")]
    NotAList { career: String, field: String },

    #[error("{field} in {career} must have exactly 3 items, got {len}")]
    WrongListLength {
        career: String,
        field: String,
        len: usize,
    },

    #[error("{field} in {career} must contain only strings")]
    NonStringItem { career: String, field: String },

    #[error("decision_guide must be a list")]
    DecisionGuideNotAList,

    #[error("decision_guide must contain only strings")]
    DecisionGuideNonString,

    #[error("decision_guide must have at least 2 items, got {0}")]
    DecisionGuideTooShort(usize),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parses and validates a raw model response into a typed result.
pub fn parse_response(raw: &str) -> Result<ComparisonResult, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let cleaned = strip_json_fences(raw);
    let value: Value = serde_json::from_str(cleaned)?;

    let root = value
        .as_object()
        .ok_or_else(|| ParseError::NotAnObject(json_type_name(&value)))?;

    let missing: Vec<String> = TOP_LEVEL_FIELDS
        .iter()
        .filter(|f| !root.contains_key(**f))
        .map(|f| f.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingFields(missing));
    }

    let career_a = parse_career(root, "career_a")?;
    let career_b = parse_career(root, "career_b")?;
    let decision_guide = parse_decision_guide(&root["decision_guide"])?;

    Ok(ComparisonResult::new(career_a, career_b, decision_guide)?)
}

fn parse_career(root: &Map<String, Value>, key: &str) -> Result<CareerInfo, ParseError> {
    let data = root[key]
        .as_object()
        .ok_or_else(|| ParseError::CareerNotAnObject {
            career: key.to_string(),
        })?;

    let missing: Vec<String> = CAREER_FIELDS
        .iter()
        .filter(|f| !data.contains_key(**f))
        .map(|f| f.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingCareerFields {
            career: key.to_string(),
            fields: missing,
        });
    }

    let overview = require_string(data, key, "overview")?;
    let skills = require_string(data, key, "skills")?;
    let time_to_enter = require_string(data, key, "time_to_enter")?;

    // Strict gate: the tier must already be one of the three tokens
    // (case-insensitively). A near-miss spelling fails the whole response —
    // recoverable upstream by trying the next provider, never auto-corrected.
    let salary_raw = require_string(data, key, "salary")?;
    let salary: SalaryTier =
        salary_raw
            .parse()
            .map_err(|_| ParseError::InvalidSalary {
                career: key.to_string(),
                value: salary_raw.clone(),
            })?;

    let pros = require_string_list(data, key, "pros")?;
    let cons = require_string_list(data, key, "cons")?;

    Ok(CareerInfo::new(
        overview,
        skills,
        salary,
        time_to_enter,
        pros,
        cons,
    )?)
}

fn require_string(
    data: &Map<String, Value>,
    career: &str,
    field: &str,
) -> Result<String, ParseError> {
    data[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ParseError::NotAString {
            career: career.to_string(),
            field: field.to_string(),
        })
}

fn require_string_list(
    data: &Map<String, Value>,
    career: &str,
    field: &str,
) -> Result<Vec<String>, ParseError> {
    let items = data[field].as_array().ok_or_else(|| ParseError::NotAList {
        career: career.to_string(),
        field: field.to_string(),
    })?;

    if items.len() != 3 {
        return Err(ParseError::WrongListLength {
            career: career.to_string(),
            field: field.to_string(),
            len: items.len(),
        });
    }

    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ParseError::NonStringItem {
            career: career.to_string(),
            field: field.to_string(),
        })
}

fn parse_decision_guide(value: &Value) -> Result<Vec<String>, ParseError> {
    let items = value.as_array().ok_or(ParseError::DecisionGuideNotAList)?;

    let guide: Vec<String> = items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or(ParseError::DecisionGuideNonString)?;

    if guide.len() < 2 {
        return Err(ParseError::DecisionGuideTooShort(guide.len()));
    }
    Ok(guide)
}

/// Strips a single ```json ... ``` or ``` ... ``` fence wrapping the payload.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
