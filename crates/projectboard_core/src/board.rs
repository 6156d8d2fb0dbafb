//! Board composition root.
//!
//! # Responsibility
//! - Own the single `ProjectStore` of a running board.
//! - Wire the input collector and the `active`/`finished` views to it.
//!
//! # Invariants
//! - Exactly one store per board; `store()`/`store_mut()` always return it.
//! - Both views subscribe before the board accepts any input, so neither
//!   misses a change.

use crate::config::BoardConfig;
use crate::input::project_input::ProjectInput;
use crate::input::validation::ValidationError;
use crate::model::project::{ListKind, ProjectId};
use crate::store::project_store::ProjectStore;
use crate::view::list_view::ListView;
use log::info;

pub struct ProjectBoard {
    store: ProjectStore,
    input: ProjectInput,
    active: ListView,
    finished: ListView,
}

impl ProjectBoard {
    pub fn new(config: &BoardConfig) -> Self {
        let mut store = ProjectStore::new();
        let input = ProjectInput::new(config.input.clone());
        let active = ListView::new(ListKind::Active, &mut store);
        let finished = ListView::new(ListKind::Finished, &mut store);

        info!(
            "event=board_ready module=board status=ok listeners={}",
            store.listener_count()
        );

        Self {
            store,
            input,
            active,
            finished,
        }
    }

    /// The board's one store.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    /// Submits the current input fields to the store.
    pub fn submit(&mut self) -> Result<ProjectId, ValidationError> {
        self.input.submit(&mut self.store)
    }

    /// Fills the input fields and submits them in one step.
    pub fn submit_fields(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, ValidationError> {
        self.input.fill(title, description, people);
        self.submit()
    }

    pub fn view(&self, kind: ListKind) -> &ListView {
        match kind {
            ListKind::Active => &self.active,
            ListKind::Finished => &self.finished,
        }
    }

    /// Both views in display order.
    pub fn views(&self) -> [&ListView; 2] {
        [&self.active, &self.finished]
    }
}

impl Default for ProjectBoard {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectBoard;
    use crate::model::project::ListKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn board_wires_both_views_before_input() {
        let board = ProjectBoard::default();
        assert_eq!(board.store().listener_count(), 2);
        assert!(board.store().is_empty());
        assert_eq!(board.view(ListKind::Active).kind(), ListKind::Active);
        assert_eq!(board.view(ListKind::Finished).kind(), ListKind::Finished);
    }

    #[test]
    fn rejected_submit_keeps_fields_for_correction() {
        let mut board = ProjectBoard::default();
        board
            .submit_fields("Build API", "Design and ship v1", "0")
            .expect_err("zero people must fail");

        assert!(board.store().is_empty());
        assert_eq!(board.input().people(), "0");
        assert_eq!(board.view(ListKind::Active).render_count(), 0);
    }

    #[test]
    fn extra_listener_via_store_mut_runs_after_views() {
        let mut board = ProjectBoard::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let active = board.view(ListKind::Active).clone();
        board.store_mut().add_listener(move |snapshot| {
            sink.borrow_mut().push((snapshot.len(), active.rows().len()));
            Ok(())
        });

        board
            .submit_fields("Build API", "Design and ship v1", "3")
            .expect("valid project");

        assert_eq!(board.store().listener_count(), 3);
        assert_eq!(*seen.borrow(), vec![(1, 1)]);
    }
}
