//! External command execution
//!
//! Fire-and-forget shell invocations on behalf of the navigator. Each run
//! gets its own thread and reports through a completion callback; no timeout
//! or cancellation is imposed here.

use std::process::{Command, Stdio};
use std::thread;

use crate::events::CommandOutcome;

/// Completion callback for a dispatched command
pub type Completion = Box<dyn FnOnce(CommandOutcome) + Send + 'static>;

/// Trait for running external commands
pub trait CommandRunner: Send + Sync {
    /// Start `command` and call `done` with its outcome when it finishes.
    ///
    /// Must not block the caller.
    fn run(&self, command: &str, done: Completion);
}

/// Runner that executes commands through `sh -c`
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, done: Completion) {
        let command = command.to_string();
        thread::spawn(move || done(run_shell(&command)));
    }
}

fn run_shell(command: &str) -> CommandOutcome {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(output) => {
            let error = if output.status.success() {
                None
            } else {
                Some(format!("command exited with {}", output.status))
            };
            CommandOutcome {
                error,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        }
        Err(e) => CommandOutcome::failed(e.to_string()),
    }
}
