//! Error types for reading, evaluating, and enumerating expressions.
//!
//! Lexing and parsing failures are expected, user-facing conditions and are returned
//! as typed results for the caller to present. Internal-consistency defects (an
//! incomplete truth table, an assignment missing a variable it was built from) are
//! asserted instead, never masked by a default truth value.

use num_bigint::BigUint;
use thiserror::Error;

/// The tokenizer met a character it does not recognize.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized character '{ch}' at offset {pos}")]
pub struct LexError {
    /// The offending character.
    pub ch: char,
    /// Character offset of `ch` in the input text.
    pub pos: usize,
}

/// Errors that can occur while parsing a token stream.
///
/// Each grammar violation is reported individually so that callers can surface
/// actionable messages; none of them are collapsed into a generic failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that does not fit the grammar at this position.
    #[error("unexpected {found} at offset {pos}: expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        pos: usize,
    },

    /// An opening parenthesis with no matching closing one.
    #[error("unmatched '(' at offset {pos}")]
    UnmatchedParenthesis { pos: usize },

    /// The input contains no expression at all.
    #[error("empty expression")]
    EmptyExpression,

    /// A complete expression followed by leftover tokens.
    #[error("trailing {found} at offset {pos} after a complete expression")]
    TrailingInput { found: String, pos: usize },
}

/// Errors that can occur while reading an expression from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors that can occur during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no entry for a variable used by the expression.
    ///
    /// Cannot occur when the assignment is built from the expression's own
    /// variable set; a caller seeing this has a defect upstream.
    #[error("no value assigned to variable {name}")]
    UnboundVariable { name: String },
}

/// Errors that can occur while enumerating a truth table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The expression has more distinct variables than the enumeration ceiling.
    ///
    /// `rows` is the number of rows the enumeration would have required, kept as a
    /// [`BigUint`] since `2^count` need not fit a native integer.
    #[error("{count} variables exceed the limit of {limit}: {rows} rows")]
    TooManyVariables {
        count: usize,
        limit: usize,
        rows: BigUint,
    },
}
