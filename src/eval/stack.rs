use super::{EvalError, Evaluator, STACK_CAPACITY};

impl Evaluator {
    pub(crate) fn is_full(&self) -> bool {
        self.stack.len() >= STACK_CAPACITY
    }

    /// Push a value, or report overflow and drop it when the stack is full
    pub(crate) fn push_operand(&mut self, value: i32) {
        if self.is_full() {
            self.report(EvalError::StackOverflow);
        } else {
            self.stack.push(value);
        }
    }

    /// Pop the two operands of a binary operator as `(a, b)`, where `b` was
    /// pushed last. Nothing is popped unless both are present.
    ///
    /// Stored values are always in operand range, so widening is enough.
    pub(crate) fn pop_pair(&mut self) -> Option<(i64, i64)> {
        if self.stack.len() < 2 {
            return None;
        }
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        Some((i64::from(a), i64::from(b)))
    }

    /// Number of operands on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
