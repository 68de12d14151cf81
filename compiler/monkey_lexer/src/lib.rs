//! Lexer for Monkey using logos with string interning.
//!
//! [`Lexer::next_token`] hands out one token at a time and keeps returning
//! EOF once the input is exhausted; [`tokenize`] collects a whole source
//! into a [`TokenList`]. Lexing never fails: characters outside the
//! language become [`TokenKind::Illegal`] tokens and the parser reports them.

use logos::Logos;
use monkey_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    Str,
    /// A string still open at end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedStr,

    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Function => TokenKind::Function,
            RawToken::Let => TokenKind::Let,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Return => TokenKind::Return,
            RawToken::Ident => TokenKind::Ident,
            RawToken::Int => TokenKind::Int,
            RawToken::Str | RawToken::UnterminatedStr => TokenKind::Str,
            RawToken::Eq => TokenKind::Eq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Asterisk => TokenKind::Asterisk,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
        }
    }

    /// Literal text for the token; strings drop their quotes.
    fn literal(self, slice: &str) -> &str {
        match self {
            RawToken::Str => slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice),
            RawToken::UnterminatedStr => slice.strip_prefix('"').unwrap_or(slice),
            _ => slice,
        }
    }
}

/// Pull-based lexer over one source text.
pub struct Lexer<'src> {
    source: &'src str,
    logos: logos::Lexer<'src, RawToken>,
    interner: &'src StringInterner,
    eof: Span,
}

impl<'src> Lexer<'src> {
    /// # Panics
    /// Panics if `source` is longer than `u32::MAX` bytes.
    pub fn new(source: &'src str, interner: &'src StringInterner) -> Self {
        let eof_pos = u32::try_from(source.len())
            .unwrap_or_else(|_| panic!("source exceeds {} bytes", u32::MAX));
        Lexer {
            source,
            logos: RawToken::lexer(source),
            interner,
            eof: Span::point(eof_pos),
        }
    }

    /// Scan the next token, or EOF once input is exhausted (and forever after).
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.logos.next() else {
            return Token::new(TokenKind::Eof, Name::EMPTY, self.eof);
        };
        let range = self.logos.span();
        let span = Span::from_range(range.clone());

        match result {
            Ok(raw) => {
                let literal = self.interner.intern(raw.literal(self.logos.slice()));
                Token::new(raw.kind(), literal, span)
            }
            Err(()) => {
                // The error range may stop inside a multi-byte character.
                let text = self.source.get(range).unwrap_or_default();
                Token::new(TokenKind::Illegal, self.interner.intern(text), span)
            }
        }
    }
}

/// Lex a complete source into a token list ending with a single EOF.
pub fn tokenize(source: &str, interner: &StringInterner) -> TokenList {
    let mut lexer = Lexer::new(source, interner);
    let mut result = TokenList::new();
    loop {
        let token = lexer.next_token();
        result.push(token);
        if token.kind == TokenKind::Eof {
            return result;
        }
    }
}
