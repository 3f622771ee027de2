use std::fmt;
use thiserror::Error;
use crate::parser::UNPARSED_TASK_NUMBER;

/// Which date-time field of a command failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Due,
    Start,
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Due => write!(f, "deadline BY timing"),
            DateField::Start => write!(f, "event FROM timing"),
            DateField::End => write!(f, "event TO timing"),
        }
    }
}

/// Every failure the tracker can report.
///
/// Messages start in lowercase so they read naturally after the `Sir, ` prefix
/// the session puts in front of them.
#[derive(Error, Debug)]
pub enum NetherError {
    #[error("the description of a {kind} cannot be empty.")]
    EmptyDescription { kind: String },

    #[error("the description or date/time of a deadline cannot be empty. Use: deadline <description> /by yyyy-MM-dd HHmm.")]
    MalformedDeadline,

    #[error("the description, start time, or end time of an event cannot be empty. Use: event <description> /from yyyy-MM-dd HHmm /to yyyy-MM-dd HHmm.")]
    MalformedEvent,

    #[error("the date/time format for the {field} is invalid ('{input}'). Please use the format: yyyy-MM-dd HHmm.")]
    InvalidDateTime { field: DateField, input: String },

    #[error("the command: '{0}' is not in our database.")]
    UnknownCommand(String),

    #[error("{}", index_message(.index, .len))]
    IndexOutOfRange { index: i64, len: usize },

    #[error("line {line} of the task file is corrupted and was skipped ({reason}).")]
    CorruptStorage { line: usize, reason: String },

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl NetherError {
    /// Whether the session can report this error and keep reading input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NetherError::Io(_))
    }
}

fn index_message(index: &i64, len: &usize) -> String {
    if *index == UNPARSED_TASK_NUMBER {
        format!("you did not give a task number. The list has {} task(s).", len)
    } else {
        format!("you inputted an invalid task index ({}). The list has {} task(s).", index, len)
    }
}

pub type Result<T> = std::result::Result<T, NetherError>;
