use std::process::{Command, Stdio};

use tracing::debug;

/// Captured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// The command's own words: stderr, then stdout, trimmed.
    pub fn diagnostic(&self) -> String {
        [self.stderr.trim(), self.stdout.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs external commands: the syntax-check authority, the privileged-write
/// authority, and the plugin listing.
///
/// Abstracted so the commit pipeline can be driven without elevated
/// privileges in tests.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
///
/// Stdin is inherited so `sudo` can prompt for a password on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        debug!(program, ?args, "running external command");
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .output()?;
        debug!(program, status = ?output.status, "external command finished");
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
