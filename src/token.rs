//! Atomic tokens for SRPN
//!
//! Tokens are the units the evaluator consumes after normalization:
//! operands (integers), arithmetic operators and single-letter commands.
//! This module also owns the precedence table used when a merged chunk
//! such as `2+3*4` is reordered into postfix form.

/// Smallest value an operand may hold
pub const MIN_OPERAND: i32 = i32::MIN;
/// Largest value an operand may hold
pub const MAX_OPERAND: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
    Power,    // ^
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// r: push the next value from the random table
    Random,
    /// d: print the whole stack, bottom first
    Display,
    /// =: print the top of the stack
    Peek,
}

impl Command {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Command::Random),
            'd' => Some(Command::Display),
            '=' => Some(Command::Peek),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An integer, already saturated to the operand range
    Operand(i32),
    Operator(Operator),
    Command(Command),
}

impl Token {
    /// Classify an atomic token. Returns `None` for anything that is not
    /// an operand, operator or command.
    pub fn classify(token: &str) -> Option<Self> {
        if is_operand(token) {
            Some(Token::Operand(parse_operand(token)))
        } else if is_operator(token) {
            single_char(token).and_then(Operator::from_char).map(Token::Operator)
        } else if is_command(token) {
            single_char(token).and_then(Command::from_char).map(Token::Command)
        } else {
            None
        }
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// True if the token starts with a digit, or with `-` and then a digit.
///
/// Only the prefix is checked: `12x` counts as an operand.
pub fn is_operand(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// True iff the token is exactly one of `+ - * / % ^`
pub fn is_operator(token: &str) -> bool {
    single_char(token).is_some_and(|c| Operator::from_char(c).is_some())
}

/// True iff the token is exactly one of `d r =`
pub fn is_command(token: &str) -> bool {
    single_char(token).is_some_and(|c| Command::from_char(c).is_some())
}

/// Reordering rank of an operator or command symbol.
///
/// Higher ranks are emitted first when a merged chunk is decomposed.
/// Returns `None` for characters that are neither operators nor commands.
pub fn precedence(c: char) -> Option<u8> {
    match c {
        '=' => Some(5),
        '^' => Some(3),
        '*' | '/' | '%' => Some(2),
        '+' | '-' | 'r' | 'd' => Some(1),
        _ => None,
    }
}

/// Clamp a wide intermediate value into the operand range
pub fn saturate(value: i64) -> i32 {
    value.clamp(MIN_OPERAND as i64, MAX_OPERAND as i64) as i32
}

/// Parse the leading `-?[0-9]+` of an operand token, saturating on overflow.
///
/// Trailing garbage after the digits is ignored, matching `is_operand`.
pub fn parse_operand(token: &str) -> i32 {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let mut magnitude: i64 = 0;
    for d in digits.chars().map_while(|c| c.to_digit(10)) {
        // Anything past i32 range clamps the same way, so stop growing early
        magnitude = (magnitude * 10 + d as i64).min(MAX_OPERAND as i64 + 1);
    }

    saturate(if negative { -magnitude } else { magnitude })
}
