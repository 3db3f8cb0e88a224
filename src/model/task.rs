use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Opaque task identifier, handed out by the todo list and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Label shown in the list (unique across the list)
    pub text: String,
    pub completed: bool,
    /// When the task was added; only used for the "time since" column
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a pending task
    pub fn new(id: TaskId, text: String, created_at: DateTime<Local>) -> Self {
        Task {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// The checkbox shown in front of the task text
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// Which tasks the list shows
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Pending, FilterMode::Completed];

    /// Whether a task belongs in the view under this mode
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Pending => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    /// Cycle: all → pending → completed → all
    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Pending,
            FilterMode::Pending => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Pending => "Pending",
            FilterMode::Completed => "Completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
