use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub type TaskId = u64;

/// One entry in the task list. The persisted record keeps exactly these
/// three fields, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Done,
    Pending,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Done => "done",
            FilterMode::Pending => "pending",
        }
    }

    /// Whether a task passes this mode, ignoring any search text.
    pub fn admits(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Done => task.completed,
            FilterMode::Pending => !task.completed,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "done" | "completed" => Ok(FilterMode::Done),
            "pending" | "open" => Ok(FilterMode::Pending),
            other => Err(anyhow!(
                "Unknown filter '{}': expected all|done|pending",
                other
            )),
        }
    }
}

impl ValueEnum for FilterMode {
    fn value_variants<'a>() -> &'a [Self] {
        const VARIANTS: [FilterMode; 3] = [FilterMode::All, FilterMode::Done, FilterMode::Pending];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// View predicate applied when projecting the task list: a mode plus a
/// case-insensitive substring search over the task text.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub mode: FilterMode,
    pub search: String,
}

impl TaskFilter {
    pub fn for_mode(mode: FilterMode) -> Self {
        Self {
            mode,
            search: String::new(),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        if !self.mode.admits(task) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        task.text
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddOutcome {
    pub id: TaskId,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub id: TaskId,
    pub changed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResult {
    pub id: TaskId,
    pub deleted: bool,
}

/// Footer summary of the full list, independent of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}
