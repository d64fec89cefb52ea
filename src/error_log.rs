//! Append-only per-entity error files.
//!
//! Each entity gets a `<entity>_errors.csv` in the results directory. The
//! file is only created once the first row is rejected; the source file's
//! header line is written as a preamble, followed by each rejected raw line
//! verbatim.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

pub struct ErrorSink {
    path: PathBuf,
    header: String,
    file: Option<File>,
    rejected: usize,
}

impl ErrorSink {
    /// Prepare the sink for one entity, clearing any file left over from a
    /// previous run.
    pub fn create(results_dir: &Path, entity: &str) -> Self {
        let path = results_dir.join(format!("{entity}_errors.csv"));
        let _ = fs::remove_file(&path);
        ErrorSink {
            path,
            header: String::new(),
            file: None,
            rejected: 0,
        }
    }

    /// Remember the source file's header line; written once, on first append.
    pub fn set_header(&mut self, header: &str) {
        self.header = header.to_string();
    }

    /// Append one rejected raw line. Logging failures are reported but never
    /// interrupt the load.
    pub fn log(&mut self, raw_line: &str) {
        if self.file.is_none() {
            match OpenOptions::new().create(true).append(true).open(&self.path) {
                Ok(mut file) => {
                    if let Err(err) = writeln!(file, "{}", self.header) {
                        warn!(path = %self.path.display(), %err, "failed to write error-file header");
                    }
                    self.file = Some(file);
                }
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "failed to open error file");
                    self.rejected += 1;
                    return;
                }
            }
        }
        if let Some(file) = &mut self.file {
            if let Err(err) = writeln!(file, "{raw_line}") {
                warn!(path = %self.path.display(), %err, "failed to append to error file");
            }
        }
        self.rejected += 1;
    }

    /// Number of lines appended so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
