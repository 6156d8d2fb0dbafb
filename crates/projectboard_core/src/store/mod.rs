//! Observable project state.
//!
//! # Responsibility
//! - Own the authoritative ordered project sequence.
//! - Fan out immutable snapshots to registered listeners on every change.
//!
//! # Invariants
//! - Records and listeners are append-only.
//! - Notification is synchronous and follows registration order.

pub mod project_store;
