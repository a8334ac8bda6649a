//! SRPN - a saturating reverse Polish notation calculator
//!
//! # Overview
//!
//! SRPN reads free-form lines, rewrites them into postfix token streams and
//! evaluates them on a stack of at most 23 signed 32-bit integers. Results
//! saturate at the `i32` bounds instead of wrapping.
//!
//! # Core Concepts
//!
//! ## Postfix Evaluation
//!
//! ```text
//! 3 4 +            # Stack: [7]
//! 10 3 -           # Stack: [7, 7]
//! d                # prints 7 and 7, bottom first
//! ```
//!
//! ## Merged Input
//!
//! Chunks that mix numbers and operators are decomposed. Operators inside
//! a chunk are emitted highest precedence first:
//!
//! ```text
//! 2+3*4            # evaluated as 2 3 4 * +
//! 1 2 # sum # +    # #...# pairs are comments
//! ```
//!
//! ## Commands
//!
//! ```text
//! r                # push the next value of a fixed pseudo-random table
//! d                # print the whole stack
//! =                # print the top of the stack
//! ```
//!
//! # Example
//!
//! ```rust
//! use srpn::{Evaluator, Message};
//!
//! let mut eval = Evaluator::new();
//! assert_eq!(eval.process("2+3*4").unwrap(), Some(14));
//! eval.process("=").unwrap();
//! assert_eq!(eval.take_messages(), vec![Message::Value(14)]);
//! ```

pub mod eval;
pub mod lexer;
pub mod normalizer;
pub mod token;

// Re-export commonly used items
pub use eval::{EvalError, Evaluator, Message, RandomCursor, RANDOM_TABLE, STACK_CAPACITY};
pub use lexer::{lex_chunk, Atom, LexError};
pub use normalizer::{normalize, Normalized};
pub use token::{Command, Operator, Token};

/// Convenience function to evaluate SRPN input on a fresh evaluator.
///
/// Each line of `input` is processed in order. Returns the printed output,
/// one message per line, or the fatal error that stopped evaluation.
pub fn eval(input: &str) -> Result<String, EvalError> {
    let mut evaluator = Evaluator::new();
    let mut output = Vec::new();
    for line in input.lines() {
        let result = evaluator.process(line);
        output.extend(evaluator.take_messages().iter().map(Message::to_string));
        result?;
    }
    Ok(output.join("\n"))
}
