//! Prefix handlers: tokens that can start an expression.

use crate::grammar::Precedence;
use crate::{ParseError, Parser};
use monkey_ir::{Expr, ExprId, ExprKind, HashEntry, TokenKind, UnaryOp};

pub(super) fn parse_ident(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let token = p.cursor.advance();
    Ok(p.alloc_expr(Expr::new(ExprKind::Ident(token.literal), token.span)))
}

pub(super) fn parse_int(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let token = p.cursor.advance();
    let literal = p.cursor.interner().lookup(token.literal);
    let value = literal
        .parse::<i64>()
        .map_err(|_| ParseError::invalid_integer(literal, token.span))?;
    Ok(p.alloc_expr(Expr::new(ExprKind::Int(value), token.span)))
}

pub(super) fn parse_str(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let token = p.cursor.advance();
    Ok(p.alloc_expr(Expr::new(ExprKind::Str(token.literal), token.span)))
}

pub(super) fn parse_bool(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let token = p.cursor.advance();
    let value = token.kind == TokenKind::True;
    Ok(p.alloc_expr(Expr::new(ExprKind::Bool(value), token.span)))
}

/// `!x` / `-x`
pub(super) fn parse_prefix(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let token = p.cursor.advance();
    let op = if token.kind == TokenKind::Bang {
        UnaryOp::Not
    } else {
        UnaryOp::Neg
    };
    let operand = p.parse_expression(Precedence::Prefix)?;
    let span = token.span.merge(p.cursor.previous_span());
    Ok(p.alloc_expr(Expr::new(ExprKind::Prefix { op, operand }, span)))
}

/// `( expr )`. Grouping leaves no node behind.
pub(super) fn parse_grouped(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    p.cursor.advance();
    let inner = p.parse_expression(Precedence::Lowest)?;
    p.cursor.expect(TokenKind::RParen)?;
    Ok(inner)
}

/// `if (cond) { ... } else { ... }`
pub(super) fn parse_if(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let start = p.cursor.advance().span;
    p.cursor.expect(TokenKind::LParen)?;
    let cond = p.parse_expression(Precedence::Lowest)?;
    p.cursor.expect(TokenKind::RParen)?;
    let consequence = p.parse_block()?;
    let alternative = if p.cursor.eat(TokenKind::Else) {
        Some(p.parse_block()?)
    } else {
        None
    };

    let span = start.merge(p.cursor.previous_span());
    Ok(p.alloc_expr(Expr::new(
        ExprKind::If {
            cond,
            consequence,
            alternative,
        },
        span,
    )))
}

/// `fn(a, b) { ... }`
pub(super) fn parse_function(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let start = p.cursor.advance().span;
    p.cursor.expect(TokenKind::LParen)?;

    let mut params = Vec::new();
    if !p.cursor.eat(TokenKind::RParen) {
        params.push(p.cursor.expect_ident()?);
        while p.cursor.eat(TokenKind::Comma) {
            params.push(p.cursor.expect_ident()?);
        }
        p.cursor.expect(TokenKind::RParen)?;
    }
    let body = p.parse_block()?;

    let params = p.arena.alloc_params(params);
    let span = start.merge(body.span);
    Ok(p.alloc_expr(Expr::new(ExprKind::Function { params, body }, span)))
}

/// `[a, b, c]`
pub(super) fn parse_array(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let start = p.cursor.advance().span;
    let elements = p.parse_expr_list(TokenKind::RBracket)?;
    let elements = p.arena.alloc_expr_list(elements);
    let span = start.merge(p.cursor.previous_span());
    Ok(p.alloc_expr(Expr::new(ExprKind::Array(elements), span)))
}

/// `{k: v, ...}`
pub(super) fn parse_hash(p: &mut Parser<'_>) -> Result<ExprId, ParseError> {
    let start = p.cursor.advance().span;

    let mut entries = Vec::new();
    while !p.cursor.check(TokenKind::RBrace) {
        let key = p.parse_expression(Precedence::Lowest)?;
        p.cursor.expect(TokenKind::Colon)?;
        let value = p.parse_expression(Precedence::Lowest)?;
        entries.push(HashEntry { key, value });
        if !p.cursor.check(TokenKind::RBrace) {
            p.cursor.expect(TokenKind::Comma)?;
        }
    }
    let end = p.cursor.expect(TokenKind::RBrace)?.span;

    let entries = p.arena.alloc_hash_entries(entries);
    Ok(p.alloc_expr(Expr::new(ExprKind::Hash(entries), start.merge(end))))
}
