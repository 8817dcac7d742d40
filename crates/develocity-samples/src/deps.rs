//! Trait seams between the samples and their environment, with the
//! production implementations.

use std::path::Path;
use std::process::Command;

use anyhow::Result;

/// Output destination for sample reports and progress messages.
pub trait UserInterface: Send + Sync {
    fn print(&self, message: &str);
    fn print_error(&self, message: &str);
}

/// Production UI writing to standard output and standard error.
pub struct RealUserInterface;

impl UserInterface for RealUserInterface {
    fn print(&self, message: &str) {
        println!("{message}");
    }

    fn print_error(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Result of running an external process to completion.
pub struct ProcessOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external processes, e.g. the GitHub CLI.
pub trait ProcessExecutor: Send + Sync {
    fn execute(
        &self,
        command: &str,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput>;
}

/// Production executor spawning real processes.
pub struct RealProcessExecutor;

impl ProcessExecutor for RealProcessExecutor {
    fn execute(
        &self,
        command: &str,
        args: &[&str],
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput> {
        let mut cmd = Command::new(command);
        cmd.args(args);
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| anyhow::anyhow!("Failed to execute {}: {}", command, e))?;

        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
