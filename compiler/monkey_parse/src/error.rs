//! Parse error types.
//!
//! Messages keep the wording the REPL has always printed, so existing
//! transcripts stay valid.

use monkey_ir::{Span, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A specific token was required but another one was found.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The token cannot start an expression.
    #[error("no prefix parse function for {0} found")]
    NoPrefixParse(TokenKind),

    /// A digit run that does not fit in an `i64`.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

/// A syntax error and the location of the token that triggered it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected, found }, span)
    }

    pub fn no_prefix_parse(kind: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::NoPrefixParse(kind), span)
    }

    pub fn invalid_integer(literal: &str, span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidInteger(literal.to_string()), span)
    }
}
