//! Input collection and validation ahead of the store.
//!
//! # Responsibility
//! - Check raw form values for presence, length and numeric range.
//! - Forward only valid input to `ProjectStore::add_project`.
//!
//! # Invariants
//! - A rejected submission never touches the store.

pub mod project_input;
pub mod validation;
