//! Core logic for ProjectBoard.
//! An observable project store, status-filtered list views and the input
//! validation that guards the store.

pub mod board;
pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use board::ProjectBoard;
pub use config::{BoardConfig, ConfigError, InputRules};
pub use input::project_input::{ProjectDraft, ProjectInput};
pub use input::validation::{
    validate, FieldValue, InputField, Validatable, ValidationError, ValidationFailure,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingStatus};
pub use model::project::{
    ListKind, ListKindParseError, ProjectId, ProjectRecord, ProjectSnapshot, ProjectStatus,
};
pub use store::project_store::{ListenerError, ListenerResult, ProjectStore};
pub use view::list_view::{ListView, RenderedRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
