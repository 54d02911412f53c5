//! Wire model for the student roster.
//!
//! Field names serialize in camelCase (`stateId`, `stateName`) so the JSON
//! shape matches what the browser client already speaks.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A reference region record. Read-only to this system: states are seeded
/// by migration and never created or mutated through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub state_id: DbId,
    pub state_name: String,
}

/// A persisted student, joined with its state for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub state_id: DbId,
    /// Joined state record. `None` only if the join was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

/// Mutable student fields as submitted by create/update requests.
///
/// Every field defaults when absent so that a missing field surfaces as a
/// field-level validation message rather than a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub state_id: Option<DbId>,
}

/// A submission that passed the full rule table.
///
/// Produced only by [`crate::validation::validate_student`]; repositories
/// accept this type so an unvalidated record cannot reach the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedStudent {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub state_id: DbId,
}
