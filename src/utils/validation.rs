use crate::domain::interval::Interval;
use crate::utils::error::{DateError, Result};
use crate::utils::standard::DateStandard;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Literal accepted wherever an instant is read from user input.
pub const NOW: &str = "now";

pub fn validate_instant(field_name: &str, value: &str) -> Result<()> {
    if value.trim().eq_ignore_ascii_case(NOW) {
        return Ok(());
    }

    if DateStandard::ALL.iter().any(|standard| standard.matches(value)) {
        return Ok(());
    }

    Err(DateError::ConfigValidationError {
        field: field_name.to_string(),
        message: format!(
            "'{}' does not match any of: {}",
            value,
            DateStandard::ALL
                .iter()
                .map(|standard| standard.id())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

pub fn validate_interval(field_name: &str, value: &str) -> Result<()> {
    let interval: Interval = value.parse().map_err(|e: DateError| {
        DateError::ConfigValidationError {
            field: field_name.to_string(),
            message: e.to_string(),
        }
    })?;

    if interval.is_zero() {
        return Err(DateError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Interval cannot be zero".to_string(),
        });
    }

    Ok(())
}

pub fn validate_at_least_one<T>(
    field_names: (&str, &str),
    values: (&Option<T>, &Option<T>),
) -> Result<()> {
    if values.0.is_none() && values.1.is_none() {
        return Err(DateError::ConfigValidationError {
            field: format!("{}/{}", field_names.0, field_names.1),
            message: "At least one of the two must be set".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DateError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
