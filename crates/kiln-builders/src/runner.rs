//! Command execution abstraction.
//!
//! Builders compose `std::process::Command` values and hand them to a
//! [`Runner`]. The shell runner executes them, the dry runner prints
//! them, and the recording runner captures them for assertions.

use std::process::Command;
use std::sync::Mutex;

use crate::error::{BuildError, Result};

/// Executes, prints, or records build commands.
///
/// Shared across builders through `Arc<dyn Runner>`, so implementations
/// must be `Send + Sync`.
pub trait Runner: Send + Sync {
    /// Run one command. `title` names the step for logs and errors.
    fn run(&self, title: &str, cmd: &mut Command) -> Result<()>;
}

/// Render a command as a single shell-like line.
pub fn render_command(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Spawns commands and fails on a non-zero exit status.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl Runner for ShellRunner {
    fn run(&self, title: &str, cmd: &mut Command) -> Result<()> {
        tracing::info!(step = title, command = %render_command(cmd), "Running");
        let status = cmd.status()?;
        if !status.success() {
            return Err(BuildError::CommandFailed {
                title: title.to_string(),
                status,
            });
        }
        Ok(())
    }
}

/// Prints what would run without executing anything.
#[derive(Debug, Default)]
pub struct DryRunner;

impl Runner for DryRunner {
    fn run(&self, title: &str, cmd: &mut Command) -> Result<()> {
        println!("{}: {}", title, render_command(cmd));
        Ok(())
    }
}

/// Captures rendered command lines for test assertions.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    log: Mutex<Vec<String>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.log.lock().expect("runner log poisoned").clone()
    }
}

impl Runner for RecordingRunner {
    fn run(&self, _title: &str, cmd: &mut Command) -> Result<()> {
        self.log
            .lock()
            .expect("runner log poisoned")
            .push(render_command(cmd));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_joins_program_and_args() {
        let mut cmd = Command::new("ninja");
        cmd.arg("-C").arg("out/host");
        assert_eq!(render_command(&cmd), "ninja -C out/host");
    }

    #[test]
    fn recording_runner_keeps_order() {
        let runner = RecordingRunner::new();
        runner.run("first", &mut Command::new("gn")).unwrap();
        runner.run("second", &mut Command::new("ninja")).unwrap();
        assert_eq!(runner.commands(), vec!["gn", "ninja"]);
    }

    #[test]
    fn shell_runner_reports_exit_status() {
        let runner = ShellRunner;
        runner.run("ok", &mut Command::new("true")).unwrap();

        let err = runner.run("fail", &mut Command::new("false")).unwrap_err();
        assert!(matches!(err, BuildError::CommandFailed { title, .. } if title == "fail"));
    }

    #[test]
    fn shell_runner_surfaces_spawn_failure() {
        let runner = ShellRunner;
        let err = runner
            .run("missing", &mut Command::new("kiln-no-such-binary"))
            .unwrap_err();
        assert!(matches!(err, BuildError::Io(_)));
    }
}
