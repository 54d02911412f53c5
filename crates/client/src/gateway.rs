//! The client's only seam to the persistence gateway.

use async_trait::async_trait;
use roster_core::student::{State, Student, StudentInput};
use roster_core::types::DbId;
use roster_core::validation::StudentField;

/// Errors surfaced by a gateway implementation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The server rejected the submission; maps to an inline field error.
    #[error("{message}")]
    Validation {
        field: StudentField,
        message: String,
    },

    /// The addressed record does not exist on the server.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request never completed (connection, timeout, malformed body).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any other server response.
    #[error("Server error ({status}): {message}")]
    Unexpected { status: u16, message: String },
}

/// Remote CRUD operations against the student roster.
///
/// The store only ever talks to this trait, so tests can substitute an
/// in-memory implementation and the transport can change without touching
/// state management.
#[async_trait]
pub trait StudentGateway: Send + Sync {
    /// All reference states, in storage insertion order.
    async fn list_states(&self) -> Result<Vec<State>, GatewayError>;

    /// All students joined with their state, optionally filtered to one state.
    async fn list_students(&self, state_id: Option<DbId>) -> Result<Vec<Student>, GatewayError>;

    /// Create a student; the server assigns the id.
    async fn create_student(&self, input: &StudentInput) -> Result<Student, GatewayError>;

    /// Replace all four mutable fields of an existing student.
    async fn update_student(&self, id: DbId, input: &StudentInput)
        -> Result<Student, GatewayError>;

    /// Hard-delete a student.
    async fn delete_student(&self, id: DbId) -> Result<(), GatewayError>;
}
