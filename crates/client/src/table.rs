//! Lifecycle adapter between the store and a tabular-display widget.
//!
//! The widget is a pluggable capability behind [`GridWidget`]; nothing here
//! names a concrete grid library. The controller owns the single live
//! instance, re-renders by full clear-and-reinsert (world is small, diffing
//! is not worth it), and routes per-row edit/delete triggers back into the
//! store. Sorting, searching, and paging of the rendered rows belong to the
//! widget itself.

use std::sync::Arc;

use roster_core::student::Student;
use roster_core::types::DbId;
use tokio::sync::{broadcast, mpsc};

use crate::store::{RosterStore, StoreEvent};

/// A per-row trigger surfaced by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(DbId),
    Delete(DbId),
}

/// Column definition for the grid.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub width_px: u16,
    pub sortable: bool,
}

/// The roster grid's columns. The serial column is display-only and the
/// actions column hosts the row triggers.
pub const COLUMNS: [Column; 6] = [
    Column { title: "S.No.", width_px: 60, sortable: true },
    Column { title: "Name", width_px: 200, sortable: true },
    Column { title: "Age", width_px: 60, sortable: true },
    Column { title: "Email", width_px: 250, sortable: true },
    Column { title: "State", width_px: 160, sortable: true },
    Column { title: "Actions", width_px: 180, sortable: false },
];

/// A fully rendered row handed to the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// 1-based display sequence number, recomputed on every redraw.
    pub serial: usize,
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub state_name: String,
}

/// Build display rows from a roster snapshot, renumbering from 1.
pub fn build_rows(roster: &[Student]) -> Vec<GridRow> {
    roster
        .iter()
        .enumerate()
        .map(|(index, student)| GridRow {
            serial: index + 1,
            id: student.id,
            name: student.name.clone(),
            age: student.age,
            email: student.email.clone(),
            state_name: student
                .state
                .as_ref()
                .map(|s| s.state_name.clone())
                .unwrap_or_else(|| "N/A".to_string()),
        })
        .collect()
}

/// Capability interface over the external tabular-display widget.
///
/// `mount` receives the column set to render and the sender on which the
/// widget reports row actions; `destroy` must release that sender (and all
/// other handlers), and must be safe to call when nothing is mounted and
/// safe to call more than once.
pub trait GridWidget: Send {
    fn mount(
        &mut self,
        columns: &[Column],
        rows: &[GridRow],
        actions: mpsc::UnboundedSender<RowAction>,
    );
    fn refresh(&mut self, rows: &[GridRow]);
    fn destroy(&mut self);
}

/// Creates widget instances; the controller never constructs one directly.
pub trait GridWidgetFactory: Send + Sync {
    fn create(&self) -> Box<dyn GridWidget>;
}

/// Synchronous user confirmation, asked before any delete is routed.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

pub struct TableController {
    factory: Box<dyn GridWidgetFactory>,
    confirm: Arc<dyn ConfirmPrompt>,
    widget: Option<Box<dyn GridWidget>>,
    actions_rx: Option<mpsc::UnboundedReceiver<RowAction>>,
    events_rx: broadcast::Receiver<StoreEvent>,
}

impl TableController {
    /// Create a controller subscribed to the store's change events.
    pub fn new(
        store: &RosterStore,
        factory: Box<dyn GridWidgetFactory>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            factory,
            confirm,
            widget: None,
            actions_rx: None,
            events_rx: store.subscribe(),
        }
    }

    /// Whether a widget instance is currently live.
    pub fn is_mounted(&self) -> bool {
        self.widget.is_some()
    }

    /// Make the grid visible and mount the widget over the current snapshot.
    ///
    /// Loads the roster first if the snapshot is empty. Mounting is
    /// idempotent: an existing instance is torn down and re-created, never
    /// double-mounted.
    pub async fn show(&mut self, store: &mut RosterStore) {
        store.set_grid_visible(true);
        if store.roster().is_empty() {
            store.load_roster().await;
        }
        self.mount_widget(store);
        self.pump_events(store);
    }

    /// Hide the grid and unconditionally destroy the widget instance.
    /// Safe when no instance exists; `show` afterwards re-mounts from scratch.
    pub fn hide(&mut self, store: &mut RosterStore) {
        store.set_grid_visible(false);
        self.destroy_widget();
    }

    /// Apply queued store events: a replaced roster re-renders the widget
    /// by full clear-and-reinsert.
    pub fn pump_events(&mut self, store: &RosterStore) {
        use broadcast::error::TryRecvError;

        let mut roster_replaced = false;
        loop {
            match self.events_rx.try_recv() {
                Ok(StoreEvent::RosterReplaced) => roster_replaced = true,
                Ok(_) => {}
                Err(TryRecvError::Lagged(_)) => roster_replaced = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        if roster_replaced {
            if let Some(widget) = self.widget.as_mut() {
                widget.refresh(&build_rows(store.roster()));
            }
        }
    }

    /// Drain and route all pending row actions from the widget.
    pub async fn pump_actions(&mut self, store: &mut RosterStore) {
        loop {
            let action = match self.actions_rx.as_mut().and_then(|rx| rx.try_recv().ok()) {
                Some(action) => action,
                None => break,
            };
            self.handle_action(store, action).await;
        }
    }

    /// Route one row action into the store.
    pub async fn handle_action(&mut self, store: &mut RosterStore, action: RowAction) {
        match action {
            RowAction::Edit(id) => {
                if let Err(err) = store.begin_edit(id) {
                    tracing::warn!(error = %err, "Edit action for unknown row");
                }
            }
            RowAction::Delete(id) => {
                if self
                    .confirm
                    .confirm("Are you sure you want to delete this student?")
                {
                    store.remove(id).await;
                }
            }
        }
        self.pump_events(store);
    }

    // -- Widget lifecycle ---------------------------------------------------

    fn mount_widget(&mut self, store: &RosterStore) {
        self.destroy_widget();

        let (tx, rx) = mpsc::unbounded_channel();
        let mut widget = self.factory.create();
        widget.mount(&COLUMNS, &build_rows(store.roster()), tx);
        self.widget = Some(widget);
        self.actions_rx = Some(rx);
    }

    fn destroy_widget(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.destroy();
        }
        // Dropping the receiver detaches any sender the old instance kept.
        self.actions_rx = None;
    }
}

impl Drop for TableController {
    fn drop(&mut self) {
        self.destroy_widget();
    }
}
