use crate::utils::error::{RecordError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Latin and Cyrillic letters, hyphen and space.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё -]+$").expect("name pattern is valid"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Shared rule for every name field.
///
/// The value is trimmed first. A patronymic that is absent, empty or blank
/// comes back as `None`. Any other name must be present and non-empty, and
/// every name must use only letters, hyphens and spaces.
pub fn validate_name(value: Option<&str>, is_patronymic: bool) -> Result<Option<String>> {
    let value = match value {
        Some(value) => value.trim(),
        None if is_patronymic => return Ok(None),
        None => return Err(RecordError::validation("Name must be a string")),
    };

    if value.is_empty() {
        if is_patronymic {
            return Ok(None);
        }
        return Err(RecordError::validation("Name must be a non-empty string"));
    }

    if !NAME_PATTERN.is_match(value) {
        tracing::debug!("Rejected name {:?}", value);
        return Err(RecordError::validation(
            "Name must contain only letters, hyphens and spaces",
        ));
    }

    Ok(Some(value.to_string()))
}

pub fn validate_employee_id(employee_id: i64) -> Result<u64> {
    if employee_id <= 0 {
        return Err(RecordError::validation(
            "Employee ID must be a positive integer",
        ));
    }
    Ok(employee_id as u64)
}

pub fn validate_salary(salary: i64) -> Result<u64> {
    if salary < 0 {
        return Err(RecordError::validation(
            "Salary must be a non-negative integer",
        ));
    }
    Ok(salary as u64)
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(RecordError::config(format!(
            "{}: unsupported value '{}'. Allowed values: {}",
            field_name,
            value,
            allowed.join(", ")
        )));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RecordError::config(format!("{}: path cannot be empty", field_name)));
    }

    if path.contains('\0') {
        return Err(RecordError::config(format!(
            "{}: path contains null bytes",
            field_name
        )));
    }

    Ok(())
}
