//! Common test utilities for srpn integration tests

pub use srpn::{normalize, EvalError, Evaluator, Message};

/// Helper to evaluate srpn input (one or more lines) and return output
pub fn eval(input: &str) -> Result<String, String> {
    srpn::eval(input).map_err(|e| e.to_string())
}

/// Helper to evaluate lines on a fresh evaluator and return the final stack
#[allow(dead_code)]
pub fn eval_stack(input: &str) -> Vec<i32> {
    let mut evaluator = Evaluator::new();
    for line in input.lines() {
        evaluator.process(line).unwrap();
    }
    evaluator.stack().to_vec()
}
