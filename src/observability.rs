//! Diagnostic stream for pipeline runs.
//!
//! Components never log through ambient global state; whoever drives the pipeline
//! builds a [`DiagnosticSink`] and injects it. Tests swap in a recording sink or
//! [`NullSink`] to capture or silence the stream.
//!
//! [`CompositeSink`] fanning out to [`StdErrSink`] + [`FileSink`] reproduces the
//! usual console-plus-logfile setup.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Severity classification for diagnostic records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    /// Informational event (config loaded, rows fetched, file saved).
    Info,
    /// Warning-level event (empty fetch, all rows dropped). Non-fatal.
    Warning,
    /// Error-level event (operation failed but the run continues).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Sink interface for pipeline diagnostics.
///
/// Implementors can write to the console, a file, metrics, or a test buffer.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic line.
    fn record(&self, severity: DiagnosticSeverity, message: &str);

    /// Record at [`DiagnosticSeverity::Info`].
    fn info(&self, message: &str) {
        self.record(DiagnosticSeverity::Info, message);
    }

    /// Record at [`DiagnosticSeverity::Warning`].
    fn warning(&self, message: &str) {
        self.record(DiagnosticSeverity::Warning, message);
    }

    /// Record at [`DiagnosticSeverity::Error`].
    fn error(&self, message: &str) {
        self.record(DiagnosticSeverity::Error, message);
    }
}

/// A sink that fans out records to a list of sinks.
#[derive(Default)]
pub struct CompositeSink {
    sinks: Vec<Arc<dyn DiagnosticSink>>,
}

impl CompositeSink {
    /// Create a new composite sink from a list of sinks.
    pub fn new(sinks: Vec<Arc<dyn DiagnosticSink>>) -> Self {
        Self { sinks }
    }
}

impl fmt::Debug for CompositeSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSink")
            .field("sinks_len", &self.sinks.len())
            .finish()
    }
}

impl DiagnosticSink for CompositeSink {
    fn record(&self, severity: DiagnosticSeverity, message: &str) {
        for s in &self.sinks {
            s.record(severity, message);
        }
    }
}

/// Logs diagnostics to stderr.
#[derive(Debug, Default)]
pub struct StdErrSink;

impl DiagnosticSink for StdErrSink {
    fn record(&self, severity: DiagnosticSeverity, message: &str) {
        eprintln!("[etl][{severity:?}] {message}");
    }
}

/// Appends timestamped diagnostics to a local log file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSink {
    /// Create a file sink that appends records to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }
}

impl DiagnosticSink for FileSink {
    fn record(&self, severity: DiagnosticSeverity, message: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {severity:?} {message}", unix_ts());
        }
    }
}

/// Discards every record. Useful in tests and benchmarks.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _severity: DiagnosticSeverity, _message: &str) {}
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
