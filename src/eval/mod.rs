//! Evaluator for SRPN - a bounded, saturating RPN stack machine
//!
//! The evaluator owns the operand stack and the random-table cursor, both of
//! which persist across lines:
//! - Operands are pushed, saturated to the `i32` range
//! - Operators pop two operands, compute in `i64` and push the clamped result
//! - Commands (`r`, `d`, `=`) read the random table or print the stack
//!
//! Recoverable errors do not interrupt a line. They are recorded as
//! [`Message`]s next to printed values, in the order they happen, and the
//! caller drains them with [`Evaluator::take_messages`]. Modulo by zero is
//! the only error returned from [`Evaluator::process`]; it ends the run.

mod commands;
mod math;
mod random;
mod stack;

use crate::lexer::LexError;
use crate::normalizer::normalize;
use crate::token::Token;
use std::fmt;
use thiserror::Error;

pub use random::{RandomCursor, RANDOM_TABLE};

/// Maximum number of operands the stack holds
pub const STACK_CAPACITY: usize = 23;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Stack overflow.")]
    StackOverflow,
    #[error("Stack underflow.")]
    StackUnderflow,
    #[error("Stack empty.")]
    EmptyStack,
    #[error("Divide by 0.")]
    DivideByZero,
    #[error("Negative power.")]
    NegativePower,
    #[error(transparent)]
    InvalidToken(#[from] LexError),
    /// Fatal: ends the run
    #[error("Floating point exception (core dumped)")]
    ModuloByZero,
}

impl EvalError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, EvalError::ModuloByZero)
    }
}

/// One line of user-visible output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A number printed by `d` or `=`
    Value(i32),
    /// A recoverable error
    Error(EvalError),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Value(n) => write!(f, "{}", n),
            Message::Error(e) => write!(f, "{}", e),
        }
    }
}

/// The evaluator maintains state and executes lines
#[derive(Debug)]
pub struct Evaluator {
    /// The operand stack, bottom first
    pub(crate) stack: Vec<i32>,
    /// Position in the random table
    pub(crate) random: RandomCursor,
    /// Output produced since the last `take_messages`
    pub(crate) messages: Vec<Message>,
    /// Trace mode - print each token and the stack after it
    pub(crate) trace_mode: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            stack: Vec::with_capacity(STACK_CAPACITY),
            random: RandomCursor::new(),
            messages: Vec::new(),
            trace_mode: false,
        }
    }

    /// Get a reference to the current stack, bottom first
    pub fn stack(&self) -> &[i32] {
        &self.stack
    }

    /// Current position in the random table
    pub fn random_cursor(&self) -> &RandomCursor {
        &self.random
    }

    /// Enable or disable trace mode
    pub fn set_trace_mode(&mut self, enabled: bool) {
        self.trace_mode = enabled;
    }

    /// Drain the output produced so far
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    /// Normalize and evaluate one line of input.
    ///
    /// Returns the value on top of the stack afterwards, if any. The only
    /// error is the fatal [`EvalError::ModuloByZero`]; output recorded before
    /// it is still available from `take_messages`.
    pub fn process(&mut self, line: &str) -> Result<Option<i32>, EvalError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let normalized = normalize(line);
        log::debug!("line {:?} normalized to {:?}", line, normalized.text);

        for diagnostic in normalized.diagnostics.iter().cloned() {
            self.report(diagnostic.into());
        }

        for token in normalized.tokens() {
            self.eval_token(token)?;
            if self.trace_mode {
                self.print_trace(token);
            }
        }

        Ok(self.stack.last().copied())
    }

    /// Evaluate a single atomic token
    pub(crate) fn eval_token(&mut self, token: &str) -> Result<(), EvalError> {
        log::trace!("token {:?} at depth {}", token, self.stack.len());
        match Token::classify(token) {
            Some(Token::Operand(value)) => {
                self.push_operand(value);
                Ok(())
            }
            Some(Token::Operator(op)) => self.apply_operator(op),
            Some(Token::Command(cmd)) => {
                self.run_command(cmd);
                Ok(())
            }
            None => {
                log::debug!("ignoring unclassified token {:?}", token);
                Ok(())
            }
        }
    }

    /// Record a recoverable error
    pub(crate) fn report(&mut self, error: EvalError) {
        log::debug!("recoverable error: {:?}", error);
        self.messages.push(Message::Error(error));
    }

    /// Record a printed value
    pub(crate) fn emit(&mut self, value: i32) {
        self.messages.push(Message::Value(value));
    }

    /// Print trace output showing the token and stack state
    pub(crate) fn print_trace(&self, token: &str) {
        // Show the top 5 items, bottom first
        let shown: Vec<String> = self
            .stack
            .iter()
            .rev()
            .take(5)
            .map(|v| v.to_string())
            .collect();

        let stack_str = if shown.is_empty() {
            "(empty)".to_string()
        } else {
            shown.into_iter().rev().collect::<Vec<_>>().join(" ")
        };

        eprintln!("\x1b[90m>>> {} │ {}\x1b[0m", token, stack_str);
    }
}
