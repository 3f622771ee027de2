use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use crate::datetime::parse_date_time;
use crate::error::{DateField, NetherError, Result};
use crate::models::Task;

/// Tasks read from disk plus the lines that had to be skipped.
#[derive(Debug, Default)]
pub struct LoadedTasks {
    pub tasks: Vec<Task>,
    /// One [`NetherError::CorruptStorage`] per skipped line.
    pub warnings: Vec<NetherError>,
}

/// Reads and writes the pipe-delimited task file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Storage {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all tasks from the task file.
    ///
    /// A missing file is an empty list. Lines that cannot be understood,
    /// including lines that are not valid UTF-8, are skipped and reported in
    /// [`LoadedTasks::warnings`]; blank lines are ignored.
    pub fn load_tasks(&self) -> Result<LoadedTasks> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file yet");
            return Ok(LoadedTasks::default());
        }
        let bytes = fs::read(&self.path)?;

        let mut loaded = LoadedTasks::default();
        for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let line_no = idx + 1;
            let parsed = match std::str::from_utf8(raw) {
                Ok(line) => {
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    if line.trim().is_empty() {
                        continue;
                    }
                    parse_line(line)
                }
                Err(_) => Err("invalid UTF-8".to_string()),
            };
            match parsed {
                Ok(task) => loaded.tasks.push(task),
                Err(reason) => {
                    warn!(line = line_no, %reason, "skipping corrupt task line");
                    loaded.warnings.push(NetherError::CorruptStorage { line: line_no, reason });
                }
            }
        }
        debug!(count = loaded.tasks.len(), path = %self.path.display(), "tasks loaded");
        Ok(loaded)
    }

    /// Saves the given list of tasks, replacing the previous file.
    ///
    /// Parent directories are created as needed. The data is written to a
    /// sibling temp file first and then renamed into place.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.to_save_format());
            contents.push('\n');
        }
        let tmp = self.tmp_path();
        if let Err(e) = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(count = tasks.len(), path = %self.path.display(), "tasks saved");
        Ok(())
    }

    /// Sibling of the task file with `.tmp` appended to its full name.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Rebuilds one task from its save-format line, or says why it can't.
fn parse_line(line: &str) -> std::result::Result<Task, String> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 3 {
        return Err(format!("expected at least 3 fields, found {}", fields.len()));
    }
    let done = match fields[1] {
        "1" | "X" => true,
        "0" | " " => false,
        other => return Err(format!("unknown done flag '{}'", other)),
    };
    let description = fields[2];
    if description.trim().is_empty() {
        return Err("empty description".into());
    }

    let expect_fields = |n: usize| {
        if fields.len() == n {
            Ok(())
        } else {
            Err(format!("'{}' task needs {} fields, found {}", fields[0], n, fields.len()))
        }
    };
    let date = |s: &str, field| {
        parse_date_time(s, field).map_err(|_| format!("invalid date-time '{}'", s))
    };

    let mut task = match fields[0] {
        "T" => {
            expect_fields(3)?;
            Task::todo(description)
        }
        "D" => {
            expect_fields(4)?;
            Task::deadline(description, date(fields[3], DateField::Due)?)
        }
        "E" => {
            expect_fields(5)?;
            Task::event(
                description,
                date(fields[3], DateField::Start)?,
                date(fields[4], DateField::End)?,
            )
        }
        other => return Err(format!("unknown task type '{}'", other)),
    };
    if done {
        task.mark_as_done();
    }
    Ok(task)
}
