//! Input validation for the presentation boundary.
//!
//! The referee core relies on these preconditions for a meaningful prompt:
//! a trimmed non-empty user name of at most 50 chars, two trimmed non-empty
//! career names of at most 100 chars each, and the two careers differing
//! case-insensitively. They are enforced here, before any comparison attempt
//! begins — input rejection is the only user-visible failure mode.

pub const MAX_USER_NAME_LEN: usize = 50;
pub const MAX_CAREER_LEN: usize = 100;

pub fn validate_user_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("user name must not be empty".to_string());
    }
    if trimmed.chars().count() > MAX_USER_NAME_LEN {
        return Err(format!(
            "user name must be at most {MAX_USER_NAME_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_career_input(career: &str) -> Result<(), String> {
    let trimmed = career.trim();
    if trimmed.is_empty() {
        return Err("career name must not be empty".to_string());
    }
    if trimmed.chars().count() > MAX_CAREER_LEN {
        return Err(format!(
            "career name must be at most {MAX_CAREER_LEN} characters"
        ));
    }
    Ok(())
}

/// Validates the full `(user_name, career_a, career_b)` triple.
pub fn validate_compare_input(
    user_name: &str,
    career_a: &str,
    career_b: &str,
) -> Result<(), String> {
    validate_user_name(user_name)?;
    validate_career_input(career_a)?;
    validate_career_input(career_b)?;
    if career_a.trim().eq_ignore_ascii_case(career_b.trim()) {
        return Err("please enter two different careers to compare".to_string());
    }
    Ok(())
}
