//! Batch driver: executes a command file against a built query engine.
//!
//! One command per non-empty line, `<query_id>[S] [arg1] [arg2]`. The `S`
//! suffix swaps the output separator from `;` to `=` and changes nothing
//! else. Every command writes its own `command<n>_output.txt` in the results
//! directory, numbered from 1 over the non-empty lines; unknown query ids
//! still produce a file holding a single newline.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::warn;

use crate::queries::{QueryEngine, Separator};

/// Invoked after each command with (query id, command number, elapsed).
pub type QueryTiming<'a> = &'a mut dyn FnMut(u8, usize, Duration);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    pub id: u8,
    pub separator: Separator,
    pub arg1: Option<&'a str>,
    pub arg2: Option<&'a str>,
}

/// Parse one command line. An unparsable id maps to 0, which no query
/// answers, so the command falls through to an empty output.
pub fn parse_command(line: &str) -> Command<'_> {
    let (head, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (line, ""),
    };

    let special = head
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphabetic());
    let id_text = if special { &head[..head.len() - 1] } else { head };
    let id = id_text.parse::<u8>().unwrap_or(0);

    // Queries 2-4 take two arguments; the rest consume the remainder whole.
    let (arg1, arg2) = if rest.is_empty() {
        (None, None)
    } else if matches!(id, 2..=4) {
        match rest.split_once(' ') {
            Some((first, second)) => (Some(first), Some(second.trim_start())),
            None => (Some(rest), None),
        }
    } else {
        (Some(rest), None)
    };

    Command {
        id,
        separator: if special {
            Separator::Special
        } else {
            Separator::Standard
        },
        arg1,
        arg2,
    }
}

/// Run every command in `commands_path`, writing one output file per command.
///
/// Returns the number of commands executed. Only the command file itself
/// failing to open (or an output file failing to be written) is an error.
pub fn run_command_file(
    engine: &QueryEngine<'_>,
    commands_path: &Path,
    results_dir: &Path,
    mut on_query: Option<QueryTiming<'_>>,
) -> Result<usize> {
    let file = File::open(commands_path)
        .with_context(|| format!("opening command file {}", commands_path.display()))?;
    let reader = BufReader::new(file);

    let mut command_no = 0usize;
    for line in reader.lines() {
        let line = line.with_context(|| format!("reading {}", commands_path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        command_no += 1;

        let command = parse_command(trimmed);
        let output_path = results_dir.join(format!("command{command_no}_output.txt"));
        let mut output = BufWriter::new(
            File::create(&output_path)
                .with_context(|| format!("creating {}", output_path.display()))?,
        );

        let started = Instant::now();
        let handled = engine
            .execute(
                command.id,
                command.arg1,
                command.arg2,
                command.separator,
                &mut output,
            )
            .with_context(|| format!("writing {}", output_path.display()))?;
        if !handled {
            warn!(query = command.id, command = command_no, "unknown query id");
            writeln!(output)?;
        }
        output
            .flush()
            .with_context(|| format!("flushing {}", output_path.display()))?;

        if let Some(callback) = on_query.as_deref_mut() {
            callback(command.id, command_no, started.elapsed());
        }
    }

    Ok(command_no)
}
