//! Row model for the `students` table.

use roster_core::student::{State, Student};
use roster_core::types::DbId;
use sqlx::FromRow;

/// A student row joined with its state name.
#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub state_id: DbId,
    pub state_name: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            name: row.name,
            age: row.age,
            email: row.email,
            state_id: row.state_id,
            state: Some(State {
                state_id: row.state_id,
                state_name: row.state_name,
            }),
        }
    }
}
