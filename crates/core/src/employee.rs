//! Employee data model.
//!
//! [`Employee`] mirrors the upstream record shape; the same field names are
//! used on the facade's own JSON output. [`EmployeeInput`] is the creation
//! payload and carries its validation rules via `validator`.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;

/// Minimum accepted employee age (inclusive).
pub const MIN_AGE: i32 = 16;

/// Maximum accepted employee age (inclusive).
pub const MAX_AGE: i32 = 75;

/// A single employee record as served by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i64,
    #[serde(rename = "employee_age", default)]
    pub age: i32,
    #[serde(rename = "employee_title", default)]
    pub title: String,
    #[serde(rename = "employee_email", default)]
    pub email: String,
}

/// Payload for creating a new employee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeInput {
    #[validate(custom(function = "not_blank", message = "name must not be blank"))]
    pub name: String,
    #[validate(range(min = 1, message = "salary must be a positive integer"))]
    pub salary: i64,
    #[validate(range(min = 16, max = 75, message = "age must be between 16 and 75"))]
    pub age: i32,
    #[validate(custom(function = "not_blank", message = "title must not be blank"))]
    pub title: String,
}

/// Body of the upstream delete call, which is keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Check an [`EmployeeInput`] against its constraints.
///
/// All violated constraints are reported in one message, sorted so the
/// output is stable regardless of map iteration order.
pub fn validate_employee_input(input: &EmployeeInput) -> Result<(), CoreError> {
    let Err(errors) = input.validate() else {
        return Ok(());
    };

    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .map(|err| {
            err.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string())
        })
        .collect();
    messages.sort();

    Err(CoreError::Validation(messages.join("; ")))
}
