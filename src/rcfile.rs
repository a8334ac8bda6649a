use srpn::Evaluator;
use crate::terminal::execute_line;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Startup file: $SRPN_RC if set, otherwise ~/.srpnrc
pub(crate) fn rc_path() -> Option<PathBuf> {
    env::var_os("SRPN_RC")
        .map(PathBuf::from)
        .or_else(|| dirs_home().map(|h| h.join(".srpnrc")))
}

/// Load and execute the startup file if it exists.
///
/// Lines run on the caller's evaluator, so values left on the stack are
/// there when the session starts.
pub(crate) fn load_srpnrc(eval: &mut Evaluator) {
    let path = match rc_path() {
        Some(p) => p,
        None => return,
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("no rc file at {}: {}", path.display(), e);
            return;
        }
    };

    log::info!("loading {}", path.display());
    load_rc_content(eval, &content, &path.display().to_string());
}

/// Execute rc content line by line, stopping at the first fatal error
fn load_rc_content(eval: &mut Evaluator, content: &str, source: &str) {
    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comment lines
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // The fatal message itself is already on stdout
        if execute_line(eval, trimmed).is_err() {
            log::warn!("{} line {}: aborted, rest of file skipped", source, line_num + 1);
            break;
        }
    }
}
