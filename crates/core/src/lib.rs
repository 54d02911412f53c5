//! Domain types and validation shared by the server and the client.
//!
//! The validation rule table lives here exactly once: the API re-validates
//! every mutation with it, and the client store runs the same checks eagerly
//! for per-field feedback. Keeping a single implementation is what prevents
//! the two sides from drifting apart.

pub mod error;
pub mod student;
pub mod types;
pub mod validation;
