//! Row model for the `states` table.

use roster_core::student::State;
use roster_core::types::DbId;
use sqlx::FromRow;

/// A row from the `states` table.
#[derive(Debug, Clone, FromRow)]
pub struct StateRow {
    pub state_id: DbId,
    pub state_name: String,
}

impl From<StateRow> for State {
    fn from(row: StateRow) -> Self {
        State {
            state_id: row.state_id,
            state_name: row.state_name,
        }
    }
}
