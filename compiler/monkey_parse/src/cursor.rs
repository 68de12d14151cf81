//! Token cursor for navigating the token stream.
//!
//! The cursor always points at the next unconsumed token (`current`), and
//! can look one token further (`peek_kind`). The stream ends with EOF and the
//! cursor never moves past it.

use super::ParseError;
use monkey_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Position in the token stream; compared before and after a parse step
    /// to detect progress.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current token. A stream without tokens reads as EOF.
    #[inline]
    pub fn current(&self) -> Token {
        static EOF: Token = Token::new(TokenKind::Eof, Name::EMPTY, Span::DUMMY);
        self.tokens.get(self.pos).copied().unwrap_or(EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Kind of the token after the current one.
    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put on EOF.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        trace!(pos = self.pos, kind = %token.kind, "advance");
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or report what was found instead.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected_token(
                kind,
                self.current_kind(),
                self.current_span(),
            ))
        }
    }

    /// Consume an identifier and return its interned name.
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        self.expect(TokenKind::Ident).map(|t| t.literal)
    }
}

#[cfg(test)]
mod tests;
