//! Presentation components fed by store snapshots.

pub mod list_view;
