//! Pratt parser for Monkey.
//!
//! Turns a [`TokenList`] into a [`Program`] plus every syntax error found on
//! the way. Parsing never stops at the first error: a failed statement is
//! recorded, the cursor skips to the next statement boundary, and parsing
//! resumes from there.
//!
//! Expressions use precedence climbing driven by a static table of prefix and
//! infix rules indexed by [`TokenKind`] (see `grammar::expr`).

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use error::{ParseError, ParseErrorKind};
pub use grammar::Precedence;

use cursor::Cursor;
use monkey_ir::{Expr, ExprArena, ExprId, Program, SharedArena, StringInterner, TokenList};
use recovery::STMT_START;

/// Result of parsing: the program and any errors.
///
/// When `errors` is non-empty the program is missing the statements that
/// failed and must not be evaluated.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages in the order they were found.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
            errors: Vec::new(),
        }
    }

    /// Parse every statement up to EOF.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut stmts = Vec::new();

        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            match self.parse_statement() {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    recovery::synchronize(&mut self.cursor, STMT_START);
                    if self.cursor.position() == start {
                        self.cursor.advance();
                    }
                }
            }
        }

        let stmts = self.arena.alloc_stmt_list(stmts);
        ParseOutput {
            program: Program::new(stmts, SharedArena::new(self.arena)),
            errors: self.errors,
        }
    }

    #[inline]
    fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        self.arena.alloc_expr(expr)
    }
}

/// Parse a token stream.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, interner).parse_program()
}

#[cfg(test)]
mod tests;
