//! Project domain model.
//!
//! # Responsibility
//! - Define the record shape exposed to store listeners.
//! - Map list kinds (`active|finished`) onto project status.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - New projects always start as `ProjectStatus::Active`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

/// Stable identifier for one tracked project.
pub type ProjectId = Uuid;

/// Immutable copy of the store's record sequence at notification time.
///
/// Listeners may keep it; later store mutations never show through.
pub type ProjectSnapshot = Arc<[ProjectRecord]>;

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing.
    Active,
    /// Work is done.
    Finished,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// One tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Serialized as a hyphenated UUID string.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Range-checked by the input collector, not by the record itself.
    pub people_count: u32,
    pub status: ProjectStatus,
}

impl ProjectRecord {
    /// Creates an active project with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people_count,
            status: ProjectStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

/// Status filter a list view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    /// Stable lowercase id used for element ids and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Status a record must carry to appear in this list.
    pub fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    pub fn matches(self, record: &ProjectRecord) -> bool {
        record.status == self.status()
    }
}

impl Display for ListKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListKind {
    type Err = ListKindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(ListKindParseError(other.to_string())),
        }
    }
}

/// Unknown list kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListKindParseError(pub String);

impl Display for ListKindParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported list kind `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for ListKindParseError {}
