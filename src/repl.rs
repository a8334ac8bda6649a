use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::env;
use std::process::ExitCode;

use crate::cli::{session, CliArgs};
use crate::terminal::execute_line;

/// Prompt from $SRPN_PROMPT, empty by default
fn prompt() -> String {
    env::var("SRPN_PROMPT").unwrap_or_default()
}

/// Run the line loop until end of input or a fatal error.
///
/// When stdin is not a terminal rustyline reads it directly, so the same
/// loop serves piped input.
pub(crate) fn run_repl(cli: &CliArgs) -> RlResult<ExitCode> {
    let mut rl = DefaultEditor::new()?;
    let mut eval = session(cli);
    let prompt = prompt();

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if execute_line(&mut eval, &line).is_err() {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C discards the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                return Ok(ExitCode::SUCCESS);
            }
            Err(e) => return Err(e),
        }
    }
}
