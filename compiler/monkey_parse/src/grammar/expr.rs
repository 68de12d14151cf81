//! Expression parsing by precedence climbing.
//!
//! Every token kind owns one [`ParseRule`] in the static [`RULES`] table: an
//! optional prefix handler (the token can start an expression), an optional
//! infix handler (the token can continue one), and the binding power of that
//! infix position. [`Parser::parse_expression`] runs the prefix handler of the
//! current token, then keeps folding the result into infix handlers while the
//! next operator binds tighter than the caller's precedence.
//!
//! Handlers consume every token of their construct, so when one returns the
//! cursor sits on the first token after it.

mod postfix;
mod primary;

use crate::{ParseError, Parser};
use monkey_ir::{ExprId, TokenKind};
use monkey_stack::ensure_sufficient_stack;

/// Binding power of an infix position, lowest first.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `!x` `-x`
    Prefix,
    /// `f(x)`
    Call,
    /// `xs[i]`
    Index,
}

type PrefixFn = fn(&mut Parser<'_>) -> Result<ExprId, ParseError>;
type InfixFn = fn(&mut Parser<'_>, ExprId) -> Result<ExprId, ParseError>;

#[derive(Copy, Clone)]
struct ParseRule {
    prefix: Option<PrefixFn>,
    infix: Option<InfixFn>,
    precedence: Precedence,
}

impl ParseRule {
    const NONE: ParseRule = ParseRule {
        prefix: None,
        infix: None,
        precedence: Precedence::Lowest,
    };
}

static RULES: [ParseRule; TokenKind::COUNT] = build_rules();

const fn build_rules() -> [ParseRule; TokenKind::COUNT] {
    let mut rules = [ParseRule::NONE; TokenKind::COUNT];

    rules[TokenKind::Ident.index()].prefix = Some(primary::parse_ident);
    rules[TokenKind::Int.index()].prefix = Some(primary::parse_int);
    rules[TokenKind::Str.index()].prefix = Some(primary::parse_str);
    rules[TokenKind::True.index()].prefix = Some(primary::parse_bool);
    rules[TokenKind::False.index()].prefix = Some(primary::parse_bool);
    rules[TokenKind::Bang.index()].prefix = Some(primary::parse_prefix);
    rules[TokenKind::If.index()].prefix = Some(primary::parse_if);
    rules[TokenKind::Function.index()].prefix = Some(primary::parse_function);
    rules[TokenKind::LBrace.index()].prefix = Some(primary::parse_hash);

    rules[TokenKind::Minus.index()] = ParseRule {
        prefix: Some(primary::parse_prefix),
        infix: Some(postfix::parse_infix),
        precedence: Precedence::Sum,
    };
    rules[TokenKind::LParen.index()] = ParseRule {
        prefix: Some(primary::parse_grouped),
        infix: Some(postfix::parse_call),
        precedence: Precedence::Call,
    };
    rules[TokenKind::LBracket.index()] = ParseRule {
        prefix: Some(primary::parse_array),
        infix: Some(postfix::parse_index),
        precedence: Precedence::Index,
    };

    rules[TokenKind::Plus.index()] = infix_rule(Precedence::Sum);
    rules[TokenKind::Asterisk.index()] = infix_rule(Precedence::Product);
    rules[TokenKind::Slash.index()] = infix_rule(Precedence::Product);
    rules[TokenKind::Lt.index()] = infix_rule(Precedence::LessGreater);
    rules[TokenKind::Gt.index()] = infix_rule(Precedence::LessGreater);
    rules[TokenKind::Eq.index()] = infix_rule(Precedence::Equals);
    rules[TokenKind::NotEq.index()] = infix_rule(Precedence::Equals);

    rules
}

const fn infix_rule(precedence: Precedence) -> ParseRule {
    ParseRule {
        prefix: None,
        infix: Some(postfix::parse_infix),
        precedence,
    }
}

#[inline]
fn rule(kind: TokenKind) -> &'static ParseRule {
    &RULES[kind.index()]
}

/// Binding power of `kind` in infix position.
#[inline]
pub(crate) fn infix_precedence(kind: TokenKind) -> Precedence {
    rule(kind).precedence
}

impl Parser<'_> {
    /// Parse an expression whose infix operators all bind tighter than
    /// `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> Result<ExprId, ParseError> {
        let current = self.cursor.current();
        let Some(prefix) = rule(current.kind).prefix else {
            return Err(ParseError::no_prefix_parse(current.kind, current.span));
        };
        let mut left = prefix(self)?;

        loop {
            let next = rule(self.cursor.current_kind());
            match next.infix {
                Some(infix) if precedence < next.precedence => left = infix(self, left)?,
                _ => return Ok(left),
            }
        }
    }
}
