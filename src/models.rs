use std::fmt;
use chrono::NaiveDateTime;
use crate::datetime::{format_canonical, format_display};

/// Variant-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// A plain task with nothing else attached.
    Todo,
    /// A task that must be done before `due_at`.
    Deadline { due_at: NaiveDateTime },
    /// A task that occupies a time range. `from` and `to` are not required to be ordered.
    Event { from: NaiveDateTime, to: NaiveDateTime },
}

/// Represents a single task in the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// What the task is about. Never empty for tasks built from user input.
    description: String,
    /// Whether the task has been completed.
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Task {
        Task { description: description.into(), done: false, kind }
    }

    pub fn todo(description: impl Into<String>) -> Task {
        Task::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due_at: NaiveDateTime) -> Task {
        Task::new(description, TaskKind::Deadline { due_at })
    }

    pub fn event(description: impl Into<String>, from: NaiveDateTime, to: NaiveDateTime) -> Task {
        Task::new(description, TaskKind::Event { from, to })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_as_done(&mut self) {
        self.done = true;
    }

    pub fn mark_as_not_done(&mut self) {
        self.done = false;
    }

    /// `T`, `D` or `E`.
    pub fn type_letter(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// `X` when done, a single space otherwise.
    pub fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }

    /// Renders the pipe-delimited line written to the task file.
    ///
    /// Format: `<letter>|<1|0>|<description>` followed by the canonical
    /// date-time fields of the variant, e.g. `D|0|buy milk|2024-03-15 1800`.
    pub fn to_save_format(&self) -> String {
        let flag = if self.done { "1" } else { "0" };
        let mut line = format!("{}|{}|{}", self.type_letter(), flag, self.description);
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due_at } => {
                line.push('|');
                line.push_str(&format_canonical(due_at));
            }
            TaskKind::Event { from, to } => {
                line.push('|');
                line.push_str(&format_canonical(from));
                line.push('|');
                line.push_str(&format_canonical(to));
            }
        }
        line
    }
}

/// Human-readable form, e.g. `[D][X] submit report (by: Mar 15 2024, 6:00PM)`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.type_letter(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due_at } => write!(f, " (by: {})", format_display(due_at)),
            TaskKind::Event { from, to } => {
                write!(f, " (from: {} to: {})", format_display(from), format_display(to))
            }
        }
    }
}
