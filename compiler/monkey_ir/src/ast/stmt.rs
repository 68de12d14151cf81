//! Statement nodes.

use super::ExprId;
use crate::{Name, Span};
use std::fmt;

#[derive(Clone, Eq, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    /// `let name = value;`
    Let { name: Name, value: ExprId },

    /// `return value;` or a bare `return;`
    Return(Option<ExprId>),

    /// An expression in statement position.
    Expr(ExprId),
}
