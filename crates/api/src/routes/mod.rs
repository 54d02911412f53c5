pub mod health;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /students            GET (list, ?stateId= filter), POST (create)
/// /students/states     GET (reference state list)
/// /students/{id}       PUT (update), DELETE (remove)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/students", student::router())
}
