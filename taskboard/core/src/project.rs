use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of a project, unique for the lifetime of a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh random id
    pub fn random() -> Self {
        ProjectId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        ProjectId(id)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        ProjectId(id.to_string())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which list a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProjectStatus {
    #[default]
    Active,
    Finished,
}

impl ProjectStatus {
    /// Lowercase name used in element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work on the board.
///
/// Everything but the status is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a fresh id
    pub fn new(title: String, description: String, people: u32) -> Self {
        Project {
            id: ProjectId::random(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned
    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}
