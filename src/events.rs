//! Menu event stream
//!
//! The navigator raises structural notifications (`Changed`, `Command`,
//! `Emit`) plus application events carried by `emit` fields in the menu
//! definition. Sinks receive them; the NDJSON sink serves CI/automation
//! consumers the same way a renderer consumes `Changed`.

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

/// Outcome of an external command invocation.
///
/// Failures are carried as data; the navigator never raises them as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    /// Spawn failure or non-zero exit, `None` on success
    pub error: Option<String>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// Successful run with captured output
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            error: None,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Run that failed before or during execution
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Event raised by the navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MenuEvent {
    /// Cursor or depth changed; the view should be re-rendered
    Changed,

    /// A command-triggered activation's external process finished
    Command { outcome: CommandOutcome },

    /// An emit item fired
    Emit,

    /// Application event from an `emit` item
    App {
        name: String,
        arguments: Vec<String>,
    },

    /// Application event carrying an external command's outcome
    AppCommand {
        name: String,
        outcome: CommandOutcome,
    },
}

/// Trait for receiving menu events
///
/// Implementations can be:
/// - a renderer trigger reacting to `Changed`
/// - JsonEventSink: NDJSON event stream for automation
/// - NoopEventSink: silent operation
pub trait MenuEventSink: Send + Sync {
    /// Handle a menu event
    fn on_event(&self, event: MenuEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl MenuEventSink for NoopEventSink {
    fn on_event(&self, _event: MenuEvent) {
        // Do nothing
    }
}

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl MenuEventSink for JsonEventSink {
    fn on_event(&self, event: MenuEvent) {
        let Ok(line) = serde_json::to_string(&event) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
