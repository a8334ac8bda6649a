//! Input normalization for SRPN
//!
//! Free-form input lines are rewritten into a flat, space-separated stream
//! of atomic tokens before evaluation:
//!
//! ```text
//! 1 2+          ->  1 2 +
//! 2+3*4         ->  2 3 4 * +
//! 3 # note # d  ->  3 d
//! ```
//!
//! Each whitespace-delimited chunk is handled on its own. Chunks that are
//! already a single token pass through; everything else is scanned into
//! numbers and symbols, and the symbols are emitted after the numbers in
//! descending precedence order. This approximates infix-to-postfix for
//! simple chunks without building an expression tree.

use crate::lexer::{lex_chunk, strip_comments, Atom, LexError};
use crate::token::{is_command, is_operand, is_operator, precedence};

/// A normalized line together with any problems found while scanning it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Space-separated atomic tokens
    pub text: String,
    /// Invalid characters reported during decomposition, in input order
    pub diagnostics: Vec<LexError>,
}

impl Normalized {
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// Normalize a raw input line
pub fn normalize(line: &str) -> Normalized {
    let lowered = line.to_lowercase();
    let uncommented = strip_comments(lowered.trim());
    let chunks: Vec<&str> = uncommented.split_whitespace().collect();
    let collapsed = chunks.join(" ");

    let mut out = Normalized::default();
    let mut pieces: Vec<String> = Vec::with_capacity(chunks.len());

    for chunk in &chunks {
        if is_standalone(chunk, chunks.len(), collapsed.chars().count()) {
            pieces.push(chunk.to_string());
        } else {
            let piece = decompose(chunk, &mut out.diagnostics);
            if !piece.is_empty() {
                pieces.push(piece);
            }
        }
    }

    out.text = pieces.join(" ");
    log::trace!("normalized {:?} -> {:?}", line, out.text);
    out
}

/// A chunk bypasses decomposition if it is a lone operator character, or if
/// it is an operand or command making up the entire one-character line.
fn is_standalone(chunk: &str, chunk_count: usize, line_len: usize) -> bool {
    is_operator(chunk)
        || ((is_operand(chunk) || is_command(chunk)) && chunk_count == 1 && line_len == 1)
}

/// Split a chunk into its numbers followed by its precedence-sorted symbols
fn decompose(chunk: &str, diagnostics: &mut Vec<LexError>) -> String {
    let mut numbers: Vec<String> = Vec::new();
    let mut symbols: Vec<char> = Vec::new();

    for atom in lex_chunk(chunk) {
        match atom {
            Atom::Number(n) => numbers.push(n),
            Atom::Symbol(c) => symbols.push(c),
            Atom::Invalid(c) => diagnostics.push(LexError::InvalidChar(c)),
        }
    }

    // sort_by_key is stable, equal ranks keep source order
    symbols.sort_by_key(|&c| std::cmp::Reverse(precedence(c).unwrap_or(0)));

    log::trace!("decomposed {:?} into {:?} {:?}", chunk, numbers, symbols);

    numbers
        .into_iter()
        .chain(symbols.into_iter().map(String::from))
        .collect::<Vec<_>>()
        .join(" ")
}
