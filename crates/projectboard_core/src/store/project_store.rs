//! Project store and listener fan-out.
//!
//! # Responsibility
//! - Append new projects and notify listeners with a fresh snapshot.
//! - Keep listener failures from starving later listeners.
//!
//! # Invariants
//! - `add_project` returns only after every listener has run.
//! - A snapshot is taken after the append and shared by all listeners of
//!   that notification; it never aliases the store's own `Vec`.
//! - Mutation needs `&mut self`, so listeners can not re-enter the store.

use crate::model::project::{ProjectId, ProjectRecord, ProjectSnapshot};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Failure reported by a listener during notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener failed: {}", self.message)
    }
}

impl Error for ListenerError {}

pub type ListenerResult = Result<(), ListenerError>;

type Listener = Box<dyn FnMut(&ProjectSnapshot) -> ListenerResult>;

/// Single owner of project records and their subscribers.
///
/// One instance lives per running board; see [`crate::board::ProjectBoard`].
#[derive(Default)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
    listeners: Vec<Listener>,
    last_notify_failures: usize,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one active project and notifies every listener.
    ///
    /// No validation happens here; callers are expected to go through
    /// [`crate::input::project_input::ProjectInput`].
    ///
    /// A listener returning `Err` is logged and skipped; the remaining
    /// listeners still run.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ProjectId {
        let record = ProjectRecord::new(title, description, people_count);
        let project_id = record.id;
        self.records.push(record);

        info!(
            "event=project_added module=store status=ok project_id={} total={}",
            project_id,
            self.records.len()
        );

        self.notify();
        project_id
    }

    /// Registers a listener for every future change.
    ///
    /// The listener is not called with the current records. Registering the
    /// same logic twice yields two calls per change.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ProjectSnapshot) -> ListenerResult + 'static,
    {
        self.listeners.push(Box::new(listener));
        debug!(
            "event=listener_registered module=store status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Records in creation order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Copies the current records into a new immutable snapshot.
    pub fn snapshot(&self) -> ProjectSnapshot {
        Arc::from(self.records.as_slice())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners that returned `Err` during the latest notification.
    pub fn last_notify_failures(&self) -> usize {
        self.last_notify_failures
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        let mut failures = 0;
        for (index, listener) in self.listeners.iter_mut().enumerate() {
            if let Err(err) = listener(&snapshot) {
                failures += 1;
                warn!(
                    "event=listener_failed module=store status=error listener_index={} error={}",
                    index, err
                );
            }
        }
        self.last_notify_failures = failures;
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("records", &self.records)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
