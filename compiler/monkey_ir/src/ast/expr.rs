//! Expression nodes.

use super::{BinaryOp, ExprId, ExprRange, HashEntryRange, ParamRange, StmtRange, UnaryOp};
use crate::{Name, Span};
use std::fmt;

/// Expression node: a kind plus the source span it was parsed from.
#[derive(Clone, Eq, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// A braced statement list: the body of an `if` branch or a function.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Block {
    pub stmts: StmtRange,
    pub span: Span,
}

/// One `key: value` pair of a hash literal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct HashEntry {
    pub key: ExprId,
    pub value: ExprId,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    /// `foo`
    Ident(Name),

    /// `5`
    Int(i64),

    /// `true` / `false`
    Bool(bool),

    /// `"text"`, contents without the quotes.
    Str(Name),

    /// `!x`, `-x`
    Prefix { op: UnaryOp, operand: ExprId },

    /// `a + b`
    Infix {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },

    /// `if (cond) { ... } else { ... }`
    If {
        cond: ExprId,
        consequence: Block,
        alternative: Option<Block>,
    },

    /// `fn(x, y) { ... }`
    Function { params: ParamRange, body: Block },

    /// `f(a, b)`
    Call { callee: ExprId, args: ExprRange },

    /// `[a, b]`
    Array(ExprRange),

    /// `xs[i]`
    Index { collection: ExprId, index: ExprId },

    /// `{k: v, ...}` in source order.
    Hash(HashEntryRange),
}
