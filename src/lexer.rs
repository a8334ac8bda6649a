//! Character-level scanning for SRPN
//!
//! A merged chunk like `-3+4*2` is broken into atoms in source order.
//! Reordering by precedence happens later in the normalizer.

use crate::token::precedence;
use nom::{
    branch::alt,
    character::complete::{anychar, char, digit0, digit1, satisfy},
    combinator::{map, recognize},
    sequence::pair,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// A run of digits, possibly carrying the chunk's leading `-`
    Number(String),
    /// An operator or command character
    Symbol(char),
    /// Anything else; reported and dropped
    Invalid(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unrecognised operator or operand \"{0}\".")]
    InvalidChar(char),
}

/// Parse the sign of the first number: `-` plus any digits directly after it
fn signed_number(input: &str) -> IResult<&str, Atom> {
    map(recognize(pair(char('-'), digit0)), |s: &str| {
        Atom::Number(s.to_string())
    })(input)
}

/// Parse a run of digits
fn number(input: &str) -> IResult<&str, Atom> {
    map(digit1, |s: &str| Atom::Number(s.to_string()))(input)
}

/// Parse an operator or command character
fn symbol(input: &str) -> IResult<&str, Atom> {
    map(satisfy(|c| precedence(c).is_some()), Atom::Symbol)(input)
}

/// Any other character
fn invalid(input: &str) -> IResult<&str, Atom> {
    map(anychar, Atom::Invalid)(input)
}

fn atom(input: &str) -> IResult<&str, Atom> {
    alt((number, symbol, invalid))(input)
}

/// Break a single whitespace-free chunk into atoms.
///
/// Only a `-` at the very start of the chunk is a sign; everywhere else it
/// is the subtraction operator. Every character ends up in some atom, so
/// scanning cannot fail.
pub fn lex_chunk(chunk: &str) -> Vec<Atom> {
    let mut atoms = Vec::new();
    let mut rest = chunk;

    if let Ok((tail, sign)) = signed_number(rest) {
        atoms.push(sign);
        rest = tail;
    }

    // atom only fails on empty input
    while let Ok((tail, next)) = atom(rest) {
        atoms.push(next);
        rest = tail;
    }

    atoms
}

/// Strip `#...#` comments from input.
///
/// Only matched pairs are removed. A `#` with no partner is left in place so
/// that it gets reported when its chunk is scanned.
pub fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('#') {
        let after_open = &rest[open + 1..];
        match after_open.find('#') {
            Some(close) => {
                result.push_str(&rest[..open]);
                rest = &after_open[close + 1..];
            }
            None => break,
        }
    }

    result.push_str(rest);
    result
}
