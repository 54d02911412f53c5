//! The in-progress form state: field values plus per-field error messages.

use roster_core::student::{Student, StudentInput};
use roster_core::types::DbId;
use roster_core::validation::StudentField;

/// Which record the form is composing.
///
/// At most one edit session is active at a time. Beginning a new edit while
/// another is in progress discards the unsaved draft of the previous session
/// without confirmation; that is intended behavior, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    /// Composing a brand new student.
    #[default]
    Idle,
    /// Editing the existing student with this id.
    Editing(DbId),
}

/// One error slot per field class, `None` when the field currently passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub state: Option<String>,
}

impl FieldErrors {
    /// Whether any field currently has an error.
    pub fn any(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.age.is_some() || self.state.is_some()
    }

    pub fn set(&mut self, field: StudentField, message: Option<String>) {
        match field {
            StudentField::Name => self.name = message,
            StudentField::Email => self.email = message,
            StudentField::Age => self.age = message,
            StudentField::State => self.state = message,
        }
    }
}

/// The not-yet-persisted field values for a create or edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub age: Option<i32>,
    pub email: String,
    pub state_id: Option<DbId>,
    pub errors: FieldErrors,
}

impl Draft {
    /// Seed a draft from an existing record (for an edit session).
    pub fn from_student(student: &Student) -> Self {
        Draft {
            name: student.name.clone(),
            age: Some(student.age),
            email: student.email.clone(),
            state_id: Some(student.state_id),
            errors: FieldErrors::default(),
        }
    }

    /// The wire submission for the current field values.
    pub fn to_input(&self) -> StudentInput {
        StudentInput {
            name: self.name.clone(),
            age: self.age,
            email: self.email.clone(),
            state_id: self.state_id,
        }
    }
}
