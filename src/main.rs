//! srpn - A saturating reverse Polish notation calculator
//!
//! Usage:
//!   srpn              Read lines from stdin
//!   srpn -c "line"    Evaluate a single line
//!   srpn script.srpn  Evaluate a file line by line

mod cli;
mod rcfile;
mod repl;
mod terminal;

use cli::{execute_command, execute_script, parse_args, print_help, print_version};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    if let Some(cmd) = &cli.command {
        return execute_command(cmd, &cli);
    }

    if let Some(script) = &cli.script {
        return execute_script(script, &cli);
    }

    match repl::run_repl(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
