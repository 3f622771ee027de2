use std::io::{BufRead, Write};
use tracing::{debug, info};
use crate::commands::{Reply, TaskBook, FAREWELL};
use crate::config::Config;
use crate::error::Result;
use crate::parser::Parser;
use crate::storage::Storage;

pub const SEPARATOR: &str = "____________________________________________________________";

const LOGO: &str = r" _   _      _   _
| \ | | ___| |_| |__  ___ _ __
|  \| |/ _ \ __| '_ \/ _ \ '__|
| |\  |  __/ |_| | | ||__/ |
|_| \_|\___|\__|_| |_\___|_|";

/// Runs a whole conversation: greet, answer one line at a time, say goodbye.
///
/// Ends on an exit command or when `input` runs dry. Only I/O failures are
/// returned; everything else is printed and the loop moves on.
pub fn run_session<R: BufRead, W: Write>(config: &Config, input: R, mut out: W) -> Result<()> {
    let storage = Storage::new(config.data_file.clone());
    let loaded = storage.load_tasks()?;
    info!(count = loaded.tasks.len(), path = %storage.path().display(), "session started");

    let parser = Parser::new(config.keywords.clone());
    let mut book = TaskBook::new(loaded.tasks, storage);

    writeln!(out, "Hello from\n{}", LOGO)?;
    frame(&mut out, &["Hello sir! I'm Nether".into(), "What can I do for you today?".into()])?;
    if !loaded.warnings.is_empty() {
        let lines: Vec<String> = loaded.warnings.iter().map(|w| format!("Sir, {}", w)).collect();
        frame(&mut out, &lines)?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parser.parse(line).and_then(|cmd| book.execute(cmd)) {
            Ok(Reply { lines, exit }) => {
                frame(&mut out, &lines)?;
                if exit {
                    return Ok(());
                }
            }
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, input = line, "rejected input");
                frame(&mut out, &[format!("Sir, {}", e)])?;
            }
            Err(e) => return Err(e),
        }
    }

    frame(&mut out, &[FAREWELL.to_string()])?;
    Ok(())
}

fn frame<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", SEPARATOR)?;
    out.flush()?;
    Ok(())
}
