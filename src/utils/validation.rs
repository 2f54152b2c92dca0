//! Validation of raw user input before it reaches the core.

use crate::core::types::SymptomId;

/// Longest input line accepted at a prompt
pub const MAX_INPUT_LENGTH: usize = 64;

/// Input validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty input")]
    Empty,
    #[error("Input too long: exceeds {MAX_INPUT_LENGTH} characters")]
    TooLong,
    #[error("Not a number: '{0}'")]
    NotANumber(String),
    #[error("Number out of range for a symptom id: {0}")]
    OutOfRange(String),
}

/// Parse a menu choice such as `"5"`.
///
/// Any integer is accepted, including negative ones; mapping it to a menu
/// entry is the caller's job.
///
/// # Errors
///
/// Returns a `ValidationError` if the input is empty, too long, or not an
/// integer.
pub fn parse_menu_choice(input: &str) -> Result<i64, ValidationError> {
    let trimmed = check_input(input)?;
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))
}

/// Parse a symptom id typed by the user.
///
/// Integers that cannot be a symptom id (negative, or beyond `u32`) are
/// reported as `OutOfRange` so callers can treat them as unknown symptoms
/// rather than as garbage input.
///
/// # Examples
///
/// ```
/// use symptom_checker::utils::validation::{parse_symptom_id, ValidationError};
/// use symptom_checker::core::types::SymptomId;
///
/// assert_eq!(parse_symptom_id(" 12 "), Ok(SymptomId::new(12)));
/// assert!(matches!(parse_symptom_id("-3"), Err(ValidationError::OutOfRange(_))));
/// assert!(matches!(parse_symptom_id("cough"), Err(ValidationError::NotANumber(_))));
/// ```
///
/// # Errors
///
/// Returns a `ValidationError` describing why the input is not an id.
pub fn parse_symptom_id(input: &str) -> Result<SymptomId, ValidationError> {
    let trimmed = check_input(input)?;

    if let Ok(id) = trimmed.parse::<u32>() {
        return Ok(SymptomId::new(id));
    }

    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Err(ValidationError::OutOfRange(trimmed.to_string()))
    } else {
        Err(ValidationError::NotANumber(trimmed.to_string()))
    }
}

fn check_input(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.len() > MAX_INPUT_LENGTH {
        return Err(ValidationError::TooLong);
    }
    Ok(trimmed)
}
