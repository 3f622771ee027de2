use chrono::NaiveDateTime;
use tracing::debug;
use crate::config::Keywords;
use crate::datetime::parse_date_time;
use crate::error::{DateField, NetherError, Result};

/// Task number used when `mark`/`unmark`/`delete` has no usable number.
/// The dispatcher rejects it like any other out-of-range index.
pub const UNPARSED_TASK_NUMBER: i64 = -1;

const BY_MARKER: &str = "/by ";
const EVENT_MARKERS: [&str; 2] = ["/from ", "/to "];

/// A validated user request, produced by [`Parser::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    AddTodo(String),
    AddDeadline(String, NaiveDateTime),
    AddEvent(String, NaiveDateTime, NaiveDateTime),
    /// 1-based task number, or [`UNPARSED_TASK_NUMBER`].
    MarkDone(i64),
    MarkNotDone(i64),
    Delete(i64),
    Exit,
}

impl Command {
    /// Whether applying the command changes the task list.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Command::List | Command::Exit)
    }
}

/// Turns raw input lines into [`Command`]s.
#[derive(Debug, Clone)]
pub struct Parser {
    keywords: Keywords,
}

impl Parser {
    pub fn new(keywords: Keywords) -> Parser {
        Parser { keywords }
    }

    /// Parses one line of input.
    ///
    /// The command word is the first whitespace-delimited token and is matched
    /// case-insensitively. Everything after it is validated per command.
    pub fn parse(&self, input: &str) -> Result<Command> {
        let input = input.trim();
        let word = input.split_whitespace().next().unwrap_or("");
        let lowered = word.to_lowercase();
        let kw = &self.keywords;

        let command = if lowered == kw.list {
            Command::List
        } else if kw.exit.iter().any(|w| *w == lowered) {
            Command::Exit
        } else if lowered == kw.todo {
            Command::AddTodo(description_after(input, word, &kw.todo)?.to_string())
        } else if lowered == kw.deadline {
            parse_deadline(description_after(input, word, &kw.deadline)?, &kw.deadline)?
        } else if lowered == kw.event {
            parse_event(description_after(input, word, &kw.event)?)?
        } else if lowered == kw.mark {
            Command::MarkDone(task_number(input))
        } else if lowered == kw.unmark {
            Command::MarkNotDone(task_number(input))
        } else if lowered == kw.delete {
            Command::Delete(task_number(input))
        } else {
            return Err(NetherError::UnknownCommand(input.to_string()));
        };

        debug!(?command, "parsed input");
        Ok(command)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(Keywords::default())
    }
}

/// Returns the text after the command word and exactly one space, verbatim.
fn description_after<'a>(input: &'a str, word: &str, kind: &str) -> Result<&'a str> {
    let empty = || NetherError::EmptyDescription { kind: kind.to_string() };
    let rest = input[word.len()..].strip_prefix(' ').ok_or_else(empty)?;
    if rest.trim().is_empty() {
        return Err(empty());
    }
    Ok(rest)
}

fn parse_deadline(body: &str, kind: &str) -> Result<Command> {
    let (description, due) = body.split_once(BY_MARKER).ok_or(NetherError::MalformedDeadline)?;
    let description = description.trim();
    if description.is_empty() {
        return Err(NetherError::EmptyDescription { kind: kind.to_string() });
    }
    if due.trim().is_empty() {
        return Err(NetherError::MalformedDeadline);
    }
    let due_at = parse_date_time(due, DateField::Due)?;
    Ok(Command::AddDeadline(description.to_string(), due_at))
}

fn parse_event(body: &str) -> Result<Command> {
    let parts = split_on_markers(body, &EVENT_MARKERS, 3);
    if parts.len() < 3 || parts.iter().any(|p| p.trim().is_empty()) {
        return Err(NetherError::MalformedEvent);
    }
    let from = parse_date_time(parts[1], DateField::Start)?;
    let to = parse_date_time(parts[2], DateField::End)?;
    Ok(Command::AddEvent(parts[0].trim().to_string(), from, to))
}

/// Splits `s` at the earliest occurrence of any marker, left to right, into at
/// most `limit` pieces. The final piece keeps any remaining markers.
fn split_on_markers<'a>(s: &'a str, markers: &[&str], limit: usize) -> Vec<&'a str> {
    let mut parts = Vec::with_capacity(limit);
    let mut rest = s;
    while parts.len() + 1 < limit {
        let next = markers
            .iter()
            .filter_map(|m| rest.find(m).map(|pos| (pos, m.len())))
            .min_by_key(|(pos, _)| *pos);
        match next {
            Some((pos, len)) => {
                parts.push(&rest[..pos]);
                rest = &rest[pos + len..];
            }
            None => break,
        }
    }
    parts.push(rest);
    parts
}

/// Second whitespace-delimited token as an integer, or [`UNPARSED_TASK_NUMBER`].
fn task_number(input: &str) -> i64 {
    input
        .split_whitespace()
        .nth(1)
        .and_then(|tok| tok.parse().ok())
        .unwrap_or(UNPARSED_TASK_NUMBER)
}
