//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define the canonical project record handed to store listeners.
//! - Define the status and list-kind enums shared by store and views.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Records are never updated after creation.

pub mod project;
