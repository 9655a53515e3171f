//! Input validation for records entering the approval pipeline.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

// ============================================================================
// Canonical validation limits — single source of truth for the entire codebase
// ============================================================================

/// Minimum club name length
pub const CLUB_NAME_MIN: usize = 3;
/// Maximum club name length
pub const CLUB_NAME_MAX: usize = 100;

/// Maximum free-text description length (clubs, events, expenditures)
pub const DESCRIPTION_MAX: usize = 500;

/// Maximum event name length
pub const EVENT_NAME_MAX: usize = 100;

/// Academic year format: two consecutive years, e.g. "2024-2025"
static ACADEMIC_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{4})$").expect("academic year pattern"));

/// Validation error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid {field}: {message}")]
    Field { field: String, message: String },
}

impl ValidationError {
    fn field(field: &str, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validation result
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Club name validator
pub struct ClubNameValidator {
    min_length: usize,
    max_length: usize,
}

impl Default for ClubNameValidator {
    fn default() -> Self {
        Self {
            min_length: CLUB_NAME_MIN,
            max_length: CLUB_NAME_MAX,
        }
    }
}

impl ClubNameValidator {
    pub fn validate(&self, name: &str) -> ValidationResult<()> {
        let trimmed = name.trim();
        if trimmed.len() < self.min_length {
            return Err(ValidationError::field(
                "club name",
                format!("must be at least {} characters", self.min_length),
            ));
        }
        if trimmed.len() > self.max_length {
            return Err(ValidationError::field(
                "club name",
                format!("must be at most {} characters", self.max_length),
            ));
        }
        Ok(())
    }
}

/// Validate a club name against the canonical limits
pub fn validate_club_name(name: &str) -> ValidationResult<()> {
    ClubNameValidator::default().validate(name)
}

/// Validate a free-text description
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.len() > DESCRIPTION_MAX {
        return Err(ValidationError::field(
            "description",
            format!("must be at most {DESCRIPTION_MAX} characters"),
        ));
    }
    Ok(())
}

/// Validate an event name
pub fn validate_event_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::field("event name", "must not be empty"));
    }
    if trimmed.len() > EVENT_NAME_MAX {
        return Err(ValidationError::field(
            "event name",
            format!("must be at most {EVENT_NAME_MAX} characters"),
        ));
    }
    Ok(())
}

/// Validate an academic year label ("2024-2025"); the years must be consecutive
pub fn validate_academic_year(year: &str) -> ValidationResult<()> {
    let Some(captures) = ACADEMIC_YEAR_RE.captures(year) else {
        return Err(ValidationError::field(
            "academic year",
            "expected the form YYYY-YYYY",
        ));
    };
    let start: u32 = captures[1].parse().map_err(|_| {
        ValidationError::field("academic year", "start year out of range")
    })?;
    let end: u32 = captures[2]
        .parse()
        .map_err(|_| ValidationError::field("academic year", "end year out of range"))?;
    if end != start + 1 {
        return Err(ValidationError::field(
            "academic year",
            "years must be consecutive",
        ));
    }
    Ok(())
}

/// Validate a monetary amount: strictly positive, at most two decimal places
pub fn validate_amount(amount: Decimal) -> ValidationResult<()> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::field("amount", "must be positive"));
    }
    if amount.scale() > 2 {
        return Err(ValidationError::field(
            "amount",
            "must have at most two decimal places",
        ));
    }
    Ok(())
}
