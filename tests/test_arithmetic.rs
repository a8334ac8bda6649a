//! Integration tests for arithmetic operations

#[path = "common/mod.rs"]
mod common;
#[allow(unused_imports)]
use common::{eval, eval_stack, Evaluator};

#[test]
fn test_plus() {
    let output = eval("5 3 + =").unwrap();
    assert_eq!(output.trim(), "8");
}

#[test]
fn test_plus_negative() {
    let output = eval("5 -3 + =").unwrap();
    assert_eq!(output.trim(), "2");
}

#[test]
fn test_minus() {
    let output = eval("10 3 - =").unwrap();
    assert_eq!(output.trim(), "7");
}

#[test]
fn test_mul() {
    let output = eval("4 5 * =").unwrap();
    assert_eq!(output.trim(), "20");
}

#[test]
fn test_div_truncates() {
    let output = eval("10 4 / =").unwrap();
    assert_eq!(output.trim(), "2");
    let output = eval("-7 2 / =").unwrap();
    assert_eq!(output.trim(), "-3");
}

#[test]
fn test_mod() {
    let output = eval("10 3 % =").unwrap();
    assert_eq!(output.trim(), "1");
}

#[test]
fn test_pow() {
    let output = eval("2 10 ^ =").unwrap();
    assert_eq!(output.trim(), "1024");
}

#[test]
fn test_arithmetic_chain() {
    // (5 + 3) * 2 = 16
    let output = eval("5 3 + 2 * =").unwrap();
    assert_eq!(output.trim(), "16");
}

#[test]
fn test_operand_order() {
    // b is popped first, so this is 2 - 9
    assert_eq!(eval_stack("2 9 -"), vec![-7]);
    assert_eq!(eval_stack("9 2 /"), vec![4]);
}

#[test]
fn test_saturating_overflow() {
    assert_eq!(eval_stack("2147483647 1 +"), vec![i32::MAX]);
    assert_eq!(eval_stack("2147483647 2 *"), vec![i32::MAX]);
    assert_eq!(eval_stack("-2147483648 1 -"), vec![i32::MIN]);
    assert_eq!(eval_stack("-2147483648 -1 /"), vec![i32::MAX]);
    assert_eq!(eval_stack("3 40 ^"), vec![i32::MAX]);
}

#[test]
fn test_saturating_literals() {
    assert_eq!(eval_stack("99999999999"), vec![i32::MAX]);
    assert_eq!(eval_stack("-99999999999"), vec![i32::MIN]);
}

#[test]
fn test_divide_by_zero_recovers() {
    let output = eval("1 0 /\nd").unwrap();
    assert_eq!(output, "Divide by 0.\n1");
}

#[test]
fn test_negative_power_recovers() {
    let output = eval("3 -2 ^\nd").unwrap();
    assert_eq!(output, "Negative power.\n3");
}

#[test]
fn test_modulo_by_zero_is_fatal() {
    let err = eval("5 0 %").unwrap_err();
    assert_eq!(err, "Floating point exception (core dumped)");
}

#[test]
fn test_modulo_by_zero_pops_operands() {
    let mut evaluator = Evaluator::new();
    assert!(evaluator.process("7 5 0 %").is_err());
    assert_eq!(evaluator.stack(), &[7]);
}

#[test]
fn test_underflow() {
    let output = eval("1 +\n=").unwrap();
    assert_eq!(output, "Stack underflow.\n1");
}

#[test]
fn test_underflow_on_empty_stack() {
    let output = eval("*").unwrap();
    assert_eq!(output, "Stack underflow.");
}
