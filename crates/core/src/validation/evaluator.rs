//! Aggregate validation over a full student submission.

use serde::{Deserialize, Serialize};

use super::rules::{check_age, check_email, check_name, check_state};
use super::StudentField;
use crate::error::CoreError;
use crate::student::{StudentInput, ValidatedStudent};

/// First violated rule of an aggregate validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: StudentField,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

/// Run every field check in order (name → email → age → state) and return
/// either the first failure or the typed, validated record. Passing here
/// does not imply the state id exists; that check belongs to the
/// persistence gateway.
pub fn validate_student(input: &StudentInput) -> Result<ValidatedStudent, ValidationError> {
    if let Some(msg) = check_name(&input.name) {
        return Err(violation(StudentField::Name, msg));
    }
    if let Some(msg) = check_email(&input.email) {
        return Err(violation(StudentField::Email, msg));
    }
    if let Some(msg) = check_age(input.age) {
        return Err(violation(StudentField::Age, msg));
    }
    if let Some(msg) = check_state(input.state_id) {
        return Err(violation(StudentField::State, msg));
    }
    let (Some(age), Some(state_id)) = (input.age, input.state_id) else {
        // The checks above guarantee presence.
        return Err(violation(StudentField::Age, "Age is required"));
    };
    Ok(ValidatedStudent {
        name: input.name.clone(),
        age,
        email: input.email.clone(),
        state_id,
    })
}

fn violation(field: StudentField, message: &str) -> ValidationError {
    ValidationError {
        field,
        message: message.to_string(),
    }
}
