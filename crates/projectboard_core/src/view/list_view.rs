//! Status-filtered project list view.
//!
//! # Responsibility
//! - Subscribe to a `ProjectStore` once, at construction.
//! - Keep the latest snapshot and fully redraw the matching rows.
//!
//! # Invariants
//! - Rows follow snapshot order.
//! - Only records whose status matches the view's `ListKind` are rendered.
//! - Records added before construction stay invisible until the next change.

use crate::model::project::{ListKind, ProjectId, ProjectSnapshot};
use crate::store::project_store::{ListenerResult, ProjectStore};
use log::debug;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;
use std::sync::Arc;

/// One drawn list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub project_id: ProjectId,
    /// Item text; the project title.
    pub text: String,
}

#[derive(Debug)]
struct ListViewState {
    kind: ListKind,
    assigned: ProjectSnapshot,
    rows: Vec<RenderedRow>,
    render_count: usize,
}

impl ListViewState {
    fn on_records_changed(&mut self, snapshot: &ProjectSnapshot) -> ListenerResult {
        self.assigned = Arc::clone(snapshot);
        self.render_projects();
        Ok(())
    }

    fn render_projects(&mut self) {
        let kind = self.kind;
        self.rows.clear();
        self.rows.extend(
            self.assigned
                .iter()
                .filter(|record| kind.matches(record))
                .map(|record| RenderedRow {
                    project_id: record.id,
                    text: record.title.clone(),
                }),
        );
        self.render_count += 1;
        debug!(
            "event=view_rendered module=view status=ok kind={} rows={} snapshot_len={}",
            kind,
            self.rows.len(),
            self.assigned.len()
        );
    }
}

/// List of projects filtered by status.
///
/// Cloning yields another handle to the same view; the store listener holds
/// one such handle, so redraws are visible through every clone.
#[derive(Debug, Clone)]
pub struct ListView {
    kind: ListKind,
    element_id: String,
    list_id: String,
    heading: String,
    state: Rc<RefCell<ListViewState>>,
}

impl ListView {
    /// Builds the view and registers it with `store`.
    ///
    /// Current records are not pulled; the first rows appear with the next
    /// `add_project`.
    pub fn new(kind: ListKind, store: &mut ProjectStore) -> Self {
        let state = Rc::new(RefCell::new(ListViewState {
            kind,
            assigned: Arc::from(Vec::new()),
            rows: Vec::new(),
            render_count: 0,
        }));

        let listener_state = Rc::clone(&state);
        store.add_listener(move |snapshot| {
            listener_state.borrow_mut().on_records_changed(snapshot)
        });

        Self {
            kind,
            element_id: format!("{kind}-projects"),
            list_id: format!("{kind}-projects-list"),
            heading: format!("{} PROJECTS", kind.as_str().to_ascii_uppercase()),
            state,
        }
    }

    /// Replaces the held snapshot and redraws.
    ///
    /// This is what the store listener runs; calling it directly is useful
    /// for hosts that replay a snapshot themselves.
    pub fn on_records_changed(&self, snapshot: &ProjectSnapshot) -> ListenerResult {
        self.state.borrow_mut().on_records_changed(snapshot)
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Rows from the latest redraw.
    pub fn rows(&self) -> Vec<RenderedRow> {
        self.state.borrow().rows.clone()
    }

    /// Latest snapshot received, unfiltered.
    pub fn assigned_projects(&self) -> ProjectSnapshot {
        Arc::clone(&self.state.borrow().assigned)
    }

    /// Number of full redraws so far.
    pub fn render_count(&self) -> usize {
        self.state.borrow().render_count
    }

    /// Plain-text rendering: heading line, then one `- title` line per row.
    pub fn render_text(&self) -> String {
        let state = self.state.borrow();
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading);
        for row in &state.rows {
            let _ = writeln!(out, "- {}", row.text);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::ListView;
    use crate::model::project::{ListKind, ProjectRecord, ProjectSnapshot, ProjectStatus};
    use crate::store::project_store::ProjectStore;
    use std::sync::Arc;

    #[test]
    fn structural_setup_uses_kind() {
        let mut store = ProjectStore::new();
        let view = ListView::new(ListKind::Finished, &mut store);

        assert_eq!(view.element_id(), "finished-projects");
        assert_eq!(view.list_id(), "finished-projects-list");
        assert_eq!(view.heading(), "FINISHED PROJECTS");
        assert_eq!(store.listener_count(), 1);
        assert_eq!(view.render_count(), 0);
    }

    #[test]
    fn redraw_replaces_previous_rows() {
        let mut store = ProjectStore::new();
        let view = ListView::new(ListKind::Active, &mut store);

        store.add_project("one", "first project", 1);
        store.add_project("two", "second project", 2);

        let titles: Vec<String> = view.rows().into_iter().map(|row| row.text).collect();
        assert_eq!(titles, vec!["one", "two"]);
        assert_eq!(view.render_count(), 2);
    }

    #[test]
    fn direct_snapshot_delivery_filters_by_status() {
        let mut store = ProjectStore::new();
        let view = ListView::new(ListKind::Finished, &mut store);

        let mut done = ProjectRecord::new("done", "already shipped", 2);
        done.status = ProjectStatus::Finished;
        let open = ProjectRecord::new("open", "still running", 4);
        let snapshot: ProjectSnapshot = Arc::from(vec![open, done.clone()]);

        view.on_records_changed(&snapshot).expect("render should succeed");

        let rows = view.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project_id, done.id);
        assert_eq!(view.assigned_projects().len(), 2);
    }

    #[test]
    fn render_text_lists_heading_then_titles() {
        let mut store = ProjectStore::new();
        let view = ListView::new(ListKind::Active, &mut store);
        store.add_project("Build API", "Design and ship v1", 3);

        assert_eq!(view.render_text(), "ACTIVE PROJECTS\n- Build API\n");
    }
}
