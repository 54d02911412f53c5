//! Field validation for student records.
//!
//! The rule table (one check set per field class, evaluated name → email →
//! age → state) is implemented once here and consumed by both execution
//! environments: the API as the authoritative gate before any mutation, and
//! the client store for eager per-keystroke feedback. Only the state
//! *existence* check stays server-side — the client cannot answer it without
//! a round trip and accepts any positive id.

mod evaluator;
mod rules;

pub use evaluator::{validate_student, ValidationError};
pub use rules::{check_age, check_email, check_name, check_state, parse_age};

use serde::{Deserialize, Serialize};

/// The four field classes a validation failure can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentField {
    Name,
    Email,
    Age,
    State,
}

impl StudentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Email => "email",
            StudentField::Age => "age",
            StudentField::State => "state",
        }
    }
}

impl std::fmt::Display for StudentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StudentField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(StudentField::Name),
            "email" => Ok(StudentField::Email),
            "age" => Ok(StudentField::Age),
            "state" => Ok(StudentField::State),
            _ => Err(()),
        }
    }
}
