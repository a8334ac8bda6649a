use super::{EvalError, Evaluator};
use crate::token::{saturate, Operator};

/// What an operator produced from its two operands
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    /// Push this (already saturated) result
    Push(i32),
    /// Restore `a`, drop `b`, push nothing
    Rollback(EvalError),
}

/// Compute `a op b` in `i64`. Operands are `i32` values, so every
/// operation except `^` fits without overflow before clamping.
fn compute(op: Operator, a: i64, b: i64) -> Result<Outcome, EvalError> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0 {
                return Ok(Outcome::Rollback(EvalError::DivideByZero));
            }
            a / b
        }
        Operator::Modulo => {
            if b == 0 {
                return Err(EvalError::ModuloByZero);
            }
            a % b
        }
        Operator::Power => {
            if b < 0 {
                return Ok(Outcome::Rollback(EvalError::NegativePower));
            }
            // b fits in u32 since it came from an i32
            a.saturating_pow(b as u32)
        }
    };
    Ok(Outcome::Push(saturate(result)))
}

impl Evaluator {
    /// Apply a binary operator to the top two operands.
    ///
    /// Underflow skips the operator without touching the stack. Modulo by
    /// zero is returned as an error and ends the run.
    pub(crate) fn apply_operator(&mut self, op: Operator) -> Result<(), EvalError> {
        let Some((a, b)) = self.pop_pair() else {
            self.report(EvalError::StackUnderflow);
            return Ok(());
        };

        match compute(op, a, b)? {
            Outcome::Push(result) => self.push_operand(result),
            Outcome::Rollback(error) => {
                self.report(error);
                self.push_operand(saturate(a));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(op: Operator, a: i64, b: i64) -> i32 {
        match compute(op, a, b) {
            Ok(Outcome::Push(n)) => n,
            other => panic!("expected a result, got {:?}", other),
        }
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(push(Operator::Add, 2, 3), 5);
        assert_eq!(push(Operator::Subtract, 2, 3), -1);
        assert_eq!(push(Operator::Multiply, -4, 3), -12);
        assert_eq!(push(Operator::Divide, 7, 2), 3);
        assert_eq!(push(Operator::Divide, -7, 2), -3);
        assert_eq!(push(Operator::Modulo, -7, 2), -1);
        assert_eq!(push(Operator::Power, 2, 10), 1024);
    }

    #[test]
    fn results_saturate() {
        let max = i64::from(i32::MAX);
        let min = i64::from(i32::MIN);
        assert_eq!(push(Operator::Add, max, 1), i32::MAX);
        assert_eq!(push(Operator::Subtract, min, 1), i32::MIN);
        assert_eq!(push(Operator::Multiply, max, max), i32::MAX);
        assert_eq!(push(Operator::Multiply, max, min), i32::MIN);
        assert_eq!(push(Operator::Divide, min, -1), i32::MAX);
        assert_eq!(push(Operator::Power, 2, 100), i32::MAX);
        assert_eq!(push(Operator::Power, -2, 101), i32::MIN);
        assert_eq!(push(Operator::Power, max, max), i32::MAX);
    }

    #[test]
    fn power_edge_cases() {
        assert_eq!(push(Operator::Power, 0, 0), 1);
        assert_eq!(push(Operator::Power, -3, 3), -27);
        assert_eq!(push(Operator::Power, 1, i64::from(i32::MAX)), 1);
    }

    #[test]
    fn recoverable_failures_roll_back() {
        assert_eq!(
            compute(Operator::Divide, 1, 0),
            Ok(Outcome::Rollback(EvalError::DivideByZero))
        );
        assert_eq!(
            compute(Operator::Power, 2, -1),
            Ok(Outcome::Rollback(EvalError::NegativePower))
        );
    }

    #[test]
    fn modulo_by_zero_is_fatal() {
        let err = compute(Operator::Modulo, 5, 0).unwrap_err();
        assert!(err.is_fatal());
    }
}
