//! Repository for the `students` table.
//!
//! Every read joins the state name so list/read responses always carry a
//! resolvable state. Methods take a generic executor so handlers can run
//! multi-step sequences (state existence check + insert) on one transaction.

use roster_core::student::ValidatedStudent;
use roster_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::student::StudentRow;

/// Column list shared across the joined queries.
const JOINED_COLUMNS: &str = "s.id, s.name, s.age, s.email, s.state_id, st.state_name";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// List students joined with their state, in insertion (`id`) order.
    /// `state_id` narrows the result to one state when given.
    pub async fn list<'e, E: PgExecutor<'e>>(
        executor: E,
        state_id: Option<DbId>,
    ) -> Result<Vec<StudentRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM students s
             JOIN states st ON st.state_id = s.state_id
             WHERE $1::BIGINT IS NULL OR s.state_id = $1
             ORDER BY s.id"
        );
        sqlx::query_as::<_, StudentRow>(&query)
            .bind(state_id)
            .fetch_all(executor)
            .await
    }

    /// Find one student joined with its state.
    pub async fn find_with_state<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<StudentRow>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM students s
             JOIN states st ON st.state_id = s.state_id
             WHERE s.id = $1"
        );
        sqlx::query_as::<_, StudentRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a validated student, returning the assigned id.
    pub async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &ValidatedStudent,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO students (name, age, email, state_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.email)
        .bind(input.state_id)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }

    /// Replace all four mutable fields of an existing student.
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        input: &ValidatedStudent,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET name = $2, age = $3, email = $4, state_id = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.age)
        .bind(&input.email)
        .bind(input.state_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a student. Returns `false` if no row was removed.
    pub async fn delete<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
