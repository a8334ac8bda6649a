use srpn::{EvalError, Evaluator};

/// Execute a single line of SRPN input and print everything it produced.
///
/// A fatal error is printed after the line's other output and then
/// returned, so the caller can end the run.
pub(crate) fn execute_line(eval: &mut Evaluator, input: &str) -> Result<Option<i32>, EvalError> {
    let result = eval.process(input);

    for message in eval.take_messages() {
        println!("{}", message);
    }

    if let Err(e) = &result {
        println!("{}", e);
    }

    result
}
