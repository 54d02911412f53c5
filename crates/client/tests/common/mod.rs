//! Test doubles for the store and table controller tests: an in-memory
//! gateway, a recording grid widget, and stub notification/confirmation
//! capabilities.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roster_core::student::{State, Student, StudentInput};
use roster_core::types::DbId;
use roster_core::validation::StudentField;
use tokio::sync::mpsc;

use roster_client::gateway::{GatewayError, StudentGateway};
use roster_client::store::Notifier;
use roster_client::table::{
    Column, ConfirmPrompt, GridRow, GridWidget, GridWidgetFactory, RowAction,
};

// ---------------------------------------------------------------------------
// Gateway double
// ---------------------------------------------------------------------------

/// In-memory gateway tracking how often the store actually hits the network.
#[derive(Default)]
pub struct MockGateway {
    pub states: Mutex<Vec<State>>,
    pub students: Mutex<Vec<Student>>,
    next_id: AtomicI64,
    /// Number of list (read) calls.
    pub list_calls: AtomicUsize,
    /// Number of create/update/delete calls.
    pub mutation_calls: AtomicUsize,
    /// When set, every mutation fails with a generic server error.
    pub fail_mutations: AtomicBool,
    /// When set, every list (read) call fails with a generic server error.
    pub fail_loads: AtomicBool,
    /// When set, create/update fail with this server-side validation error.
    pub reject_with: Mutex<Option<(StudentField, String)>>,
}

impl MockGateway {
    pub fn with_states(states: Vec<(DbId, &str)>) -> Arc<Self> {
        let gateway = MockGateway::default();
        *gateway.states.lock().unwrap() = states
            .into_iter()
            .map(|(state_id, name)| State {
                state_id,
                state_name: name.to_string(),
            })
            .collect();
        gateway.next_id.store(1, Ordering::SeqCst);
        Arc::new(gateway)
    }

    /// Insert a student directly into backing storage (no counters bumped).
    pub fn seed_student(&self, name: &str, age: i32, email: &str, state_id: DbId) -> DbId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let state = self.lookup_state(state_id);
        self.students.lock().unwrap().push(Student {
            id,
            name: name.to_string(),
            age,
            email: email.to_string(),
            state_id,
            state,
        });
        id
    }

    fn lookup_state(&self, state_id: DbId) -> Option<State> {
        self.states
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.state_id == state_id)
            .cloned()
    }

    fn check_load_failure(&self) -> Result<(), GatewayError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(GatewayError::Unexpected {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }

    fn check_failures(&self) -> Result<(), GatewayError> {
        if let Some((field, message)) = self.reject_with.lock().unwrap().clone() {
            return Err(GatewayError::Validation { field, message });
        }
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(GatewayError::Unexpected {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StudentGateway for MockGateway {
    async fn list_states(&self) -> Result<Vec<State>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_load_failure()?;
        Ok(self.states.lock().unwrap().clone())
    }

    async fn list_students(&self, state_id: Option<DbId>) -> Result<Vec<Student>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_load_failure()?;
        let students = self.students.lock().unwrap();
        Ok(students
            .iter()
            .filter(|s| state_id.map_or(true, |id| s.state_id == id))
            .cloned()
            .collect())
    }

    async fn create_student(&self, input: &StudentInput) -> Result<Student, GatewayError> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failures()?;
        let id = self.seed_student(
            &input.name,
            input.age.unwrap_or_default(),
            &input.email,
            input.state_id.unwrap_or_default(),
        );
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .unwrap())
    }

    async fn update_student(
        &self,
        id: DbId,
        input: &StudentInput,
    ) -> Result<Student, GatewayError> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failures()?;
        let state = self.lookup_state(input.state_id.unwrap_or_default());
        let mut students = self.students.lock().unwrap();
        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| GatewayError::NotFound(format!("Student with id {id} not found")))?;
        student.name = input.name.clone();
        student.age = input.age.unwrap_or_default();
        student.email = input.email.clone();
        student.state_id = input.state_id.unwrap_or_default();
        student.state = state;
        Ok(student.clone())
    }

    async fn delete_student(&self, id: DbId) -> Result<(), GatewayError> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failures()?;
        let mut students = self.students.lock().unwrap();
        let before = students.len();
        students.retain(|s| s.id != id);
        if students.len() == before {
            return Err(GatewayError::NotFound(format!(
                "Student with id {id} not found"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Notification / confirmation doubles
// ---------------------------------------------------------------------------

/// Captures blocking notifications for assertions.
#[derive(Default)]
pub struct TestNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl TestNotifier {
    pub fn last(&self) -> Option<String> {
        self.messages.lock().unwrap().last().cloned()
    }
}

impl Notifier for TestNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Answers every confirmation with a fixed choice, counting the prompts.
pub struct StubConfirm {
    pub accept: bool,
    pub asked: AtomicUsize,
}

impl StubConfirm {
    pub fn new(accept: bool) -> Arc<Self> {
        Arc::new(Self {
            accept,
            asked: AtomicUsize::new(0),
        })
    }
}

impl ConfirmPrompt for StubConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.accept
    }
}

// ---------------------------------------------------------------------------
// Widget double
// ---------------------------------------------------------------------------

/// Shared observation log written by every widget instance a factory makes.
#[derive(Default)]
pub struct WidgetLog {
    pub created: usize,
    pub mounts: usize,
    pub refreshes: Vec<Vec<GridRow>>,
    pub destroys: usize,
    /// Instances currently mounted and not yet destroyed.
    pub live: usize,
    /// Action sender of the most recently mounted instance.
    pub actions: Option<mpsc::UnboundedSender<RowAction>>,
    /// Rows bound at the most recent mount.
    pub mounted_rows: Vec<GridRow>,
    /// Columns bound at the most recent mount.
    pub mounted_columns: Vec<Column>,
}

/// Widget that records its lifecycle instead of rendering anything.
pub struct RecordingWidget {
    log: Arc<Mutex<WidgetLog>>,
    destroyed: bool,
}

impl GridWidget for RecordingWidget {
    fn mount(
        &mut self,
        columns: &[Column],
        rows: &[GridRow],
        actions: mpsc::UnboundedSender<RowAction>,
    ) {
        let mut log = self.log.lock().unwrap();
        log.mounts += 1;
        log.live += 1;
        log.mounted_columns = columns.to_vec();
        log.mounted_rows = rows.to_vec();
        log.actions = Some(actions);
    }

    fn refresh(&mut self, rows: &[GridRow]) {
        self.log.lock().unwrap().refreshes.push(rows.to_vec());
    }

    fn destroy(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.destroys += 1;
        if !self.destroyed {
            self.destroyed = true;
            log.live -= 1;
        }
    }
}

pub struct RecordingFactory {
    pub log: Arc<Mutex<WidgetLog>>,
}

impl RecordingFactory {
    pub fn new() -> (Box<Self>, Arc<Mutex<WidgetLog>>) {
        let log = Arc::new(Mutex::new(WidgetLog::default()));
        (Box::new(Self { log: Arc::clone(&log) }), log)
    }
}

impl GridWidgetFactory for RecordingFactory {
    fn create(&self) -> Box<dyn GridWidget> {
        self.log.lock().unwrap().created += 1;
        Box::new(RecordingWidget {
            log: Arc::clone(&self.log),
            destroyed: false,
        })
    }
}
