//! Infix handlers: binary operators, calls and indexing.

use super::infix_precedence;
use crate::grammar::Precedence;
use crate::{ParseError, Parser};
use monkey_ir::{BinaryOp, Expr, ExprId, ExprKind, TokenKind};

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Asterisk => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::Gt => Some(BinaryOp::Gt),
        _ => None,
    }
}

/// `left <op> right`, left-associative.
pub(super) fn parse_infix(p: &mut Parser<'_>, left: ExprId) -> Result<ExprId, ParseError> {
    let token = p.cursor.advance();
    let Some(op) = binary_op(token.kind) else {
        return Err(ParseError::no_prefix_parse(token.kind, token.span));
    };
    let right = p.parse_expression(infix_precedence(token.kind))?;

    let span = p.arena.get_expr(left).span.merge(p.cursor.previous_span());
    Ok(p.alloc_expr(Expr::new(ExprKind::Infix { left, op, right }, span)))
}

/// `callee(args)`
pub(super) fn parse_call(p: &mut Parser<'_>, callee: ExprId) -> Result<ExprId, ParseError> {
    p.cursor.advance();
    let args = p.parse_expr_list(TokenKind::RParen)?;
    let args = p.arena.alloc_expr_list(args);

    let span = p.arena.get_expr(callee).span.merge(p.cursor.previous_span());
    Ok(p.alloc_expr(Expr::new(ExprKind::Call { callee, args }, span)))
}

/// `collection[index]`
pub(super) fn parse_index(p: &mut Parser<'_>, collection: ExprId) -> Result<ExprId, ParseError> {
    p.cursor.advance();
    let index = p.parse_expression(Precedence::Lowest)?;
    p.cursor.expect(TokenKind::RBracket)?;

    let span = p
        .arena
        .get_expr(collection)
        .span
        .merge(p.cursor.previous_span());
    Ok(p.alloc_expr(Expr::new(ExprKind::Index { collection, index }, span)))
}

impl Parser<'_> {
    /// Comma-separated expressions up to and including `close`. The opening
    /// delimiter is already consumed.
    pub(crate) fn parse_expr_list(&mut self, close: TokenKind) -> Result<Vec<ExprId>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.eat(close) {
            return Ok(items);
        }
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.cursor.eat(TokenKind::Comma) {
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.cursor.expect(close)?;
        Ok(items)
    }
}
