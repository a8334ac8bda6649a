use srpn::Evaluator;
use crate::rcfile::load_srpnrc;
use crate::terminal::execute_line;
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
    pub(crate) no_rc: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                cli.trace = true;
            }
            "--no-rc" => {
                cli.no_rc = true;
            }
            "-c" => {
                // Everything after -c is the line to evaluate
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"srpn {} - A saturating reverse Polish notation calculator

USAGE:
    srpn                    Read lines from stdin (interactive if a terminal)
    srpn -c <line>          Evaluate a single line
    srpn <script>           Evaluate a file line by line
    srpn --trace            Print each token and the stack to stderr
    srpn --no-rc            Skip the startup file
    srpn --help             Show this help message
    srpn --version          Show version

STARTUP:
    ~/.srpnrc               Evaluated before the first line (if exists)
    SRPN_RC=<path>          Use a different startup file
    SRPN_PROMPT=<text>      Interactive prompt (empty by default)
    RUST_LOG=debug          Diagnostic logging to stderr

OPERANDS:
    Integers, saturated to [-2147483648, 2147483647]. The stack holds 23.

OPERATORS:
    + - * / % ^             Pop b, pop a, push a op b

COMMANDS:
    r                       Push the next pseudo-random number
    d                       Print the stack, bottom first
    =                       Print the top of the stack

COMMENTS:
    # comment #             Text between a pair of # is ignored

EXAMPLES:
    1 2 +                   # 3
    2+3*4                   # 14 (operators in a chunk run by precedence)
    10 3 % =                # prints 1
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("srpn {}", VERSION);
}

/// Build the evaluator for a session, loading the startup file if wanted
pub(crate) fn session(cli: &CliArgs) -> Evaluator {
    let mut eval = Evaluator::new();
    eval.set_trace_mode(cli.trace);
    if !cli.no_rc {
        load_srpnrc(&mut eval);
    }
    eval
}

/// Execute a single line
pub(crate) fn execute_command(cmd: &str, cli: &CliArgs) -> ExitCode {
    let mut eval = session(cli);

    match execute_line(&mut eval, cmd) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Execute a script file, one line at a time on a shared stack
pub(crate) fn execute_script(path: &str, cli: &CliArgs) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut eval = Evaluator::new();
    eval.set_trace_mode(cli.trace);

    for (line_num, line) in content.lines().enumerate() {
        if execute_line(&mut eval, line).is_err() {
            log::debug!("{} stopped at line {}", path, line_num + 1);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
