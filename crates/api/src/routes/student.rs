//! Route definitions for the `/students` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /            -> list (optional ?stateId= filter)
/// POST   /            -> create
/// GET    /states      -> list_states
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list).post(student::create))
        .route("/states", get(student::list_states))
        .route("/{id}", put(student::update).delete(student::delete))
}
