//! Handlers for the `/students` resource.
//!
//! Create and update are the authoritative validation gate: the full rule
//! table runs before any mutation, regardless of what the client already
//! checked. The state existence check and the write share one transaction
//! so a concurrent state removal cannot leave a dangling reference.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::student::{State as StateRecord, Student, StudentInput};
use roster_core::types::DbId;
use roster_core::validation::{validate_student, StudentField};
use roster_db::repositories::{StateRepo, StudentRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /students`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub state_id: Option<DbId>,
}

/// GET /students?stateId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Student>>> {
    let rows = StudentRepo::list(&state.pool, params.state_id).await?;
    Ok(Json(rows.into_iter().map(Student::from).collect()))
}

/// GET /students/states
pub async fn list_states(State(state): State<AppState>) -> AppResult<Json<Vec<StateRecord>>> {
    let rows = StateRepo::list(&state.pool).await?;
    Ok(Json(rows.into_iter().map(StateRecord::from).collect()))
}

/// POST /students
///
/// Success stays 200 (not 201) for wire compatibility with the existing
/// browser client.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<StudentInput>,
) -> AppResult<Json<Student>> {
    let validated = validate_student(&input).map_err(CoreError::from)?;

    let mut tx = state.pool.begin().await?;
    if !StateRepo::exists(&mut *tx, validated.state_id).await? {
        return Err(state_missing(validated.state_id));
    }
    let id = StudentRepo::insert(&mut *tx, &validated).await?;
    let row = StudentRepo::find_with_state(&mut *tx, id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("created student {id} not readable")))?;
    tx.commit().await?;

    tracing::info!(id, name = %validated.name, "Student created");
    Ok(Json(row.into()))
}

/// PUT /students/{id}
///
/// An unknown id is reported before validation runs, so a bad payload
/// against a missing record still yields 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StudentInput>,
) -> AppResult<Json<Student>> {
    let mut tx = state.pool.begin().await?;
    if StudentRepo::find_with_state(&mut *tx, id).await?.is_none() {
        return Err(not_found(id));
    }

    let validated = validate_student(&input).map_err(CoreError::from)?;
    if !StateRepo::exists(&mut *tx, validated.state_id).await? {
        return Err(state_missing(validated.state_id));
    }

    // The row can vanish between the read above and the write if a
    // concurrent delete commits first; report that as 404, not 500.
    if !StudentRepo::update(&mut *tx, id, &validated).await? {
        return Err(not_found(id));
    }
    let row = StudentRepo::find_with_state(&mut *tx, id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("updated student {id} not readable")))?;
    tx.commit().await?;

    tracing::info!(id, "Student updated");
    Ok(Json(row.into()))
}

/// DELETE /students/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found(id));
    }
    tracing::info!(id, "Student deleted");
    Ok(StatusCode::OK)
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}

fn state_missing(state_id: DbId) -> AppError {
    AppError::Core(CoreError::validation(
        StudentField::State,
        format!("State with ID {state_id} does not exist"),
    ))
}
