use tracing::debug;
use crate::error::{NetherError, Result};
use crate::models::Task;
use crate::parser::Command;
use crate::storage::Storage;

pub const FAREWELL: &str =
    "Bye. If you need any more help in the future, feel free to ask me. Enjoy your day!";

/// Text produced by one command, and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Reply {
    fn say(lines: Vec<String>) -> Reply {
        Reply { lines, exit: false }
    }
}

/// The in-memory task list and the file it is persisted to.
pub struct TaskBook {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskBook {
    pub fn new(tasks: Vec<Task>, storage: Storage) -> TaskBook {
        TaskBook { tasks, storage }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Applies one command.
    ///
    /// Mutating commands rewrite the whole task file once they succeed. A
    /// failed command leaves both the list and the file untouched.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let mutating = command.is_mutating();
        let reply = match command {
            Command::List => self.cmd_list(),
            Command::AddTodo(description) => self.cmd_add(Task::todo(description)),
            Command::AddDeadline(description, due_at) => {
                self.cmd_add(Task::deadline(description, due_at))
            }
            Command::AddEvent(description, from, to) => {
                self.cmd_add(Task::event(description, from, to))
            }
            Command::MarkDone(index) => self.cmd_mark(index, true)?,
            Command::MarkNotDone(index) => self.cmd_mark(index, false)?,
            Command::Delete(index) => self.cmd_delete(index)?,
            Command::Exit => Reply {
                lines: vec![FAREWELL.into()],
                exit: true,
            },
        };
        if mutating {
            self.storage.save_tasks(&self.tasks)?;
        }
        Ok(reply)
    }

    /// Lists tasks 1-indexed in insertion order.
    fn cmd_list(&self) -> Reply {
        if self.tasks.is_empty() {
            return Reply::say(vec!["There are no tasks in your list yet.".into()]);
        }
        let mut lines = vec!["Here are the tasks in your list:".to_string()];
        lines.extend(self.tasks.iter().enumerate().map(|(i, t)| format!("{}. {}", i + 1, t)));
        Reply::say(lines)
    }

    fn cmd_add(&mut self, task: Task) -> Reply {
        debug!(task = %task, "adding task");
        let echo = format!("  {}", task);
        self.tasks.push(task);
        Reply::say(vec!["Got it. I've added this task:".into(), echo, self.count_line()])
    }

    fn cmd_mark(&mut self, index: i64, done: bool) -> Result<Reply> {
        let pos = self.position(index)?;
        let task = &mut self.tasks[pos];
        let header = if done {
            task.mark_as_done();
            "Well done! I've marked this task as done:"
        } else {
            task.mark_as_not_done();
            "Understood, I've marked this task as not done:"
        };
        Ok(Reply::say(vec![header.into(), format!("  {}", task)]))
    }

    fn cmd_delete(&mut self, index: i64) -> Result<Reply> {
        let pos = self.position(index)?;
        let removed = self.tasks.remove(pos);
        Ok(Reply::say(vec![
            "Noted, I've removed this task from the list:".into(),
            format!("  {}", removed),
            self.count_line(),
        ]))
    }

    /// Converts a 1-based task number into a vector position.
    fn position(&self, index: i64) -> Result<usize> {
        let len = self.tasks.len();
        match usize::try_from(index) {
            Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
            _ => Err(NetherError::IndexOutOfRange { index, len }),
        }
    }

    fn count_line(&self) -> String {
        let n = self.tasks.len();
        format!("Now you have {} task{} in the list.", n, if n == 1 { "" } else { "s" })
    }
}
