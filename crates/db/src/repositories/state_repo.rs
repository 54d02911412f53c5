//! Repository for the `states` table (read-only).

use roster_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::state::StateRow;

/// Read access to the reference state list. This table is seeded by
/// migration and never written through the repositories.
pub struct StateRepo;

impl StateRepo {
    /// List all states in insertion (`state_id`) order.
    pub async fn list<'e, E: PgExecutor<'e>>(executor: E) -> Result<Vec<StateRow>, sqlx::Error> {
        sqlx::query_as::<_, StateRow>(
            "SELECT state_id, state_name FROM states ORDER BY state_id",
        )
        .fetch_all(executor)
        .await
    }

    /// Whether a state with the given id exists.
    ///
    /// Callers that pair this with an insert must run both on the same
    /// transaction so the answer cannot go stale between the check and
    /// the write.
    pub async fn exists<'e, E: PgExecutor<'e>>(
        executor: E,
        state_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM states WHERE state_id = $1)")
                .bind(state_id)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }
}
