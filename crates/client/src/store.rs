//! Reactive client state for the roster screen.
//!
//! [`RosterStore`] holds the roster snapshot, reference state list, the
//! current [`Draft`], and the [`EditSession`]. Every mutation publishes a
//! [`StoreEvent`] over a broadcast channel before returning, so views stay
//! in sync without the store knowing about them.
//!
//! After any successful mutation the store reloads the whole roster from
//! the server instead of merging the returned record: slower, but the
//! visible snapshot is always server truth.

use std::sync::Arc;

use roster_core::student::{State, Student};
use roster_core::types::DbId;
use roster_core::validation::{
    check_email, check_name, check_state, parse_age, validate_student, StudentField,
};
use tokio::sync::broadcast;

use crate::draft::{Draft, EditSession, FieldErrors};
use crate::gateway::{GatewayError, StudentGateway};

/// Change notification published by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    StatesLoaded,
    RosterReplaced,
    DraftChanged,
    SessionChanged,
    GridVisibility(bool),
}

/// User-facing blocking notification sink (the `alert(...)` of the browser
/// client). Mutation outcomes go through this; load failures deliberately
/// do not.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Errors from store operations that reject their preconditions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("student {0} is not in the current roster snapshot")]
    UnknownStudent(DbId),
}

/// Default broadcast capacity; plenty for a handful of views.
const EVENT_CAPACITY: usize = 64;

pub struct RosterStore {
    gateway: Arc<dyn StudentGateway>,
    notifier: Arc<dyn Notifier>,
    roster: Vec<Student>,
    states: Vec<State>,
    draft: Draft,
    session: EditSession,
    grid_visible: bool,
    events: broadcast::Sender<StoreEvent>,
}

impl RosterStore {
    pub fn new(gateway: Arc<dyn StudentGateway>, notifier: Arc<dyn Notifier>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            gateway,
            notifier,
            roster: Vec::new(),
            states: Vec::new(),
            draft: Draft::default(),
            session: EditSession::Idle,
            grid_visible: false,
            events,
        }
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Current roster snapshot, ordered as returned by the last load.
    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        if self.grid_visible != visible {
            self.grid_visible = visible;
            self.publish(StoreEvent::GridVisibility(visible));
        }
    }

    // -- Loading ------------------------------------------------------------

    /// Replace the state reference list from the server.
    pub async fn load_states(&mut self) {
        match self.gateway.list_states().await {
            Ok(states) => {
                self.states = states;
                self.publish(StoreEvent::StatesLoaded);
            }
            Err(err) => tracing::error!(error = %err, "States load error"),
        }
    }

    /// Replace the whole roster snapshot from the server.
    ///
    /// Overlapping loads are allowed; whichever response resolves last wins
    /// and becomes the visible snapshot. Failures are logged, not surfaced.
    pub async fn load_roster(&mut self) {
        match self.gateway.list_students(None).await {
            Ok(students) => {
                self.roster = students;
                self.publish(StoreEvent::RosterReplaced);
            }
            Err(err) => tracing::error!(error = %err, "Roster load error"),
        }
    }

    // -- Edit session -------------------------------------------------------

    /// Seed the draft from a roster record and switch to editing it.
    ///
    /// Any unsaved draft of a previous session is discarded.
    pub fn begin_edit(&mut self, id: DbId) -> Result<(), StoreError> {
        let student = self
            .roster
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::UnknownStudent(id))?;
        self.draft = Draft::from_student(student);
        self.session = EditSession::Editing(id);
        self.publish(StoreEvent::DraftChanged);
        self.publish(StoreEvent::SessionChanged);
        Ok(())
    }

    /// Discard the draft and all field errors, returning to `Idle`.
    pub fn cancel(&mut self) {
        self.draft = Draft::default();
        self.session = EditSession::Idle;
        self.publish(StoreEvent::DraftChanged);
        self.publish(StoreEvent::SessionChanged);
    }

    // -- Eager per-field validation -----------------------------------------

    /// Set the draft name, validating it immediately.
    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
        let error = check_name(name).map(str::to_string);
        self.draft.errors.set(StudentField::Name, error);
        self.publish(StoreEvent::DraftChanged);
    }

    /// Set the draft email, validating it immediately.
    pub fn set_email(&mut self, email: &str) {
        self.draft.email = email.to_string();
        let error = check_email(email).map(str::to_string);
        self.draft.errors.set(StudentField::Email, error);
        self.publish(StoreEvent::DraftChanged);
    }

    /// Set the draft age from free-text input, validating it immediately.
    /// Invalid input leaves no stale parsed value behind.
    pub fn set_age_input(&mut self, input: &str) {
        match parse_age(input) {
            Ok(age) => {
                self.draft.age = Some(age);
                self.draft.errors.set(StudentField::Age, None);
            }
            Err(msg) => {
                self.draft.age = None;
                self.draft.errors.set(StudentField::Age, Some(msg.to_string()));
            }
        }
        self.publish(StoreEvent::DraftChanged);
    }

    /// Set the selected state, validating it immediately. The client accepts
    /// any positive id; existence is the server's check.
    pub fn set_state(&mut self, state_id: Option<DbId>) {
        self.draft.state_id = state_id;
        let error = check_state(state_id).map(str::to_string);
        self.draft.errors.set(StudentField::State, error);
        self.publish(StoreEvent::DraftChanged);
    }

    // -- Mutations ----------------------------------------------------------

    /// Validate the draft in aggregate and submit it.
    ///
    /// With any field error present the submission is blocked locally — no
    /// network call is made and the errors stay visible. Otherwise the draft
    /// goes to update (when editing) or create, and on success the draft is
    /// cleared, the session returns to `Idle`, and the roster is reloaded.
    ///
    /// Returns `true` only when the record was persisted.
    pub async fn submit(&mut self) -> bool {
        let input = self.draft.to_input();
        if let Err(err) = validate_student(&input) {
            self.refresh_all_field_errors();
            self.publish(StoreEvent::DraftChanged);
            tracing::debug!(field = %err.field, "Submission blocked by local validation");
            return false;
        }

        let result = match self.session {
            EditSession::Editing(id) => self.gateway.update_student(id, &input).await,
            EditSession::Idle => self.gateway.create_student(&input).await,
        };

        match result {
            Ok(_) => {
                let message = match self.session {
                    EditSession::Editing(_) => "Student updated successfully!",
                    EditSession::Idle => "Student added successfully!",
                };
                self.notifier.notify(message);
                self.draft = Draft::default();
                self.session = EditSession::Idle;
                self.publish(StoreEvent::DraftChanged);
                self.publish(StoreEvent::SessionChanged);
                // Never merge the returned record; reload server truth.
                self.load_roster().await;
                true
            }
            Err(GatewayError::Validation { field, message }) => {
                // The server saw something the eager checks did not
                // (typically a state that no longer exists).
                self.draft.errors.set(field, Some(message));
                self.publish(StoreEvent::DraftChanged);
                false
            }
            Err(err) => {
                self.notifier.notify(&format!("Error saving student: {err}"));
                false
            }
        }
    }

    /// Delete a student and reload the roster.
    ///
    /// The caller (table view controller) must have obtained explicit user
    /// confirmation before invoking this.
    pub async fn remove(&mut self, id: DbId) -> bool {
        match self.gateway.delete_student(id).await {
            Ok(()) => {
                self.notifier.notify("Student deleted successfully!");
                self.load_roster().await;
                true
            }
            Err(err) => {
                self.notifier.notify(&format!("Error deleting student: {err}"));
                false
            }
        }
    }

    // -- Internals ----------------------------------------------------------

    /// Re-run every field check against the current draft values, so the
    /// aggregate submit pass leaves each field's message visible.
    fn refresh_all_field_errors(&mut self) {
        let errors = FieldErrors {
            name: check_name(&self.draft.name).map(str::to_string),
            email: check_email(&self.draft.email).map(str::to_string),
            age: match self.draft.age {
                Some(age) if (1..=150).contains(&age) => None,
                Some(_) => Some("Please enter a realistic age! (1-150)".to_string()),
                // Keep a more specific parse message if one is showing.
                None => Some(
                    self.draft
                        .errors
                        .age
                        .clone()
                        .unwrap_or_else(|| "Age is required".to_string()),
                ),
            },
            state: check_state(self.draft.state_id).map(str::to_string),
        };
        self.draft.errors = errors;
    }

    fn publish(&self, event: StoreEvent) {
        // Nobody listening is fine.
        let _ = self.events.send(event);
    }
}
