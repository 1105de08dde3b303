//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::BreathworkError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `BreathworkError::Parse` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, BreathworkError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "breathwork", &mut buf);
    String::from_utf8(buf).map_err(|e| BreathworkError::Parse(format!("UTF-8 error: {e}")))
}
