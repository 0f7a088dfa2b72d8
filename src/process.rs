//! Captured-output runner for external tools

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Report from a failed external tool invocation.
#[derive(Debug, Error)]
#[error("`{command}` failed: {detail}")]
pub struct ToolError {
    /// The command line that was attempted.
    pub command: String,
    /// Captured stderr, or the launch error when the tool never started.
    pub detail: String,
}

/// Run a program to completion with captured output, optionally inside `cwd`.
///
/// The invocation blocks until the child exits. Output is captured
/// rather than inherited so failure diagnostics can be attached to the
/// returned error instead of interleaving with the progress spinner.
///
/// # Errors
///
/// Returns a [`ToolError`] when the program cannot be launched or
/// exits with a non-zero status. The error carries the child's stderr
/// (falling back to stdout, then the exit status) as its detail.
pub fn run(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<(), ToolError> {
    let rendered = render_command(program, args);

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|err| ToolError {
        command: rendered.clone(),
        detail: err.to_string(),
    })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut detail = if stderr.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        stderr.trim().to_string()
    };
    if detail.is_empty() {
        detail = format!("exited with {}", output.status);
    }

    Err(ToolError {
        command: rendered,
        detail,
    })
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
