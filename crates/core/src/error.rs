use crate::types::DbId;
use crate::validation::StudentField;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{message}")]
    Validation {
        field: StudentField,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Validation failure for a specific field class.
    pub fn validation(field: StudentField, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
