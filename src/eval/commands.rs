use super::{EvalError, Evaluator, Message};
use crate::token::{Command, MIN_OPERAND};

impl Evaluator {
    pub(crate) fn run_command(&mut self, cmd: Command) {
        match cmd {
            Command::Random => self.command_random(),
            Command::Display => self.command_display(),
            Command::Peek => self.command_peek(),
        }
    }

    /// r: push the next table value. The cursor advances even when the
    /// push is rejected.
    pub(crate) fn command_random(&mut self) {
        let value = self.random.next_value();
        self.push_operand(value);
    }

    /// d: print the stack bottom first. An empty stack prints the minimum
    /// operand instead of an error.
    pub(crate) fn command_display(&mut self) {
        if self.stack.is_empty() {
            self.emit(MIN_OPERAND);
            return;
        }
        self.messages
            .extend(self.stack.iter().copied().map(Message::Value));
    }

    /// =: print the top of the stack without popping it
    pub(crate) fn command_peek(&mut self) {
        match self.stack.last().copied() {
            Some(top) => self.emit(top),
            None => self.report(EvalError::EmptyStack),
        }
    }
}
