//! Canonical source rendering.
//!
//! Prefix and infix expressions are fully parenthesized, so the rendering
//! shows how the parser grouped operators. Output is valid source: parsing
//! it again yields a tree with the same rendering.

use super::{Block, ExprId, ExprKind, StmtId, StmtKind, StmtRange};
use crate::{ExprArena, StringInterner};
use std::fmt::{self, Display, Formatter};

/// Walks the arena and writes canonical text.
#[derive(Clone, Copy)]
struct Renderer<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl Renderer<'_> {
    fn expr(self, f: &mut Formatter<'_>, id: ExprId) -> fmt::Result {
        match &self.arena.get_expr(id).kind {
            ExprKind::Ident(name) => f.write_str(self.interner.lookup(*name)),
            ExprKind::Int(n) => write!(f, "{n}"),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Str(s) => write!(f, "\"{}\"", self.interner.lookup(*s)),
            ExprKind::Prefix { op, operand } => {
                write!(f, "({op}")?;
                self.expr(f, *operand)?;
                f.write_str(")")
            }
            ExprKind::Infix { left, op, right } => {
                f.write_str("(")?;
                self.expr(f, *left)?;
                write!(f, " {op} ")?;
                self.expr(f, *right)?;
                f.write_str(")")
            }
            ExprKind::If {
                cond,
                consequence,
                alternative,
            } => {
                f.write_str("if (")?;
                self.expr(f, *cond)?;
                f.write_str(") ")?;
                self.block(f, *consequence)?;
                if let Some(alternative) = alternative {
                    f.write_str(" else ")?;
                    self.block(f, *alternative)?;
                }
                Ok(())
            }
            ExprKind::Function { params, body } => {
                f.write_str("fn(")?;
                for (i, param) in self.arena.get_params(*params).iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(self.interner.lookup(*param))?;
                }
                f.write_str(") ")?;
                self.block(f, *body)
            }
            ExprKind::Call { callee, args } => {
                self.expr(f, *callee)?;
                f.write_str("(")?;
                self.expr_list(f, self.arena.get_expr_list(*args))?;
                f.write_str(")")
            }
            ExprKind::Array(elements) => {
                f.write_str("[")?;
                self.expr_list(f, self.arena.get_expr_list(*elements))?;
                f.write_str("]")
            }
            ExprKind::Index { collection, index } => {
                f.write_str("(")?;
                self.expr(f, *collection)?;
                f.write_str("[")?;
                self.expr(f, *index)?;
                f.write_str("])")
            }
            ExprKind::Hash(entries) => {
                f.write_str("{")?;
                for (i, entry) in self.arena.get_hash_entries(*entries).iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    self.expr(f, entry.key)?;
                    f.write_str(": ")?;
                    self.expr(f, entry.value)?;
                }
                f.write_str("}")
            }
        }
    }

    fn expr_list(self, f: &mut Formatter<'_>, ids: &[ExprId]) -> fmt::Result {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            self.expr(f, *id)?;
        }
        Ok(())
    }

    /// Statements separated by single spaces. An expression statement gets a
    /// `;` unless it is last, so adjacent statements never fuse on reparse.
    fn stmts(self, f: &mut Formatter<'_>, stmts: &[StmtId]) -> fmt::Result {
        for (i, id) in stmts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            self.stmt(f, *id, i + 1 == stmts.len())?;
        }
        Ok(())
    }

    fn stmt(self, f: &mut Formatter<'_>, id: StmtId, is_last: bool) -> fmt::Result {
        match &self.arena.get_stmt(id).kind {
            StmtKind::Let { name, value } => {
                write!(f, "let {} = ", self.interner.lookup(*name))?;
                self.expr(f, *value)?;
                f.write_str(";")
            }
            StmtKind::Return(Some(value)) => {
                f.write_str("return ")?;
                self.expr(f, *value)?;
                f.write_str(";")
            }
            StmtKind::Return(None) => f.write_str("return;"),
            StmtKind::Expr(expr) => {
                self.expr(f, *expr)?;
                if is_last {
                    Ok(())
                } else {
                    f.write_str(";")
                }
            }
        }
    }

    fn block(self, f: &mut Formatter<'_>, block: Block) -> fmt::Result {
        let stmts = self.arena.stmt_list(block.stmts);
        if stmts.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        self.stmts(f, stmts)?;
        f.write_str(" }")
    }
}

/// Canonical rendering of a whole program.
pub struct ProgramDisplay<'a> {
    renderer: Renderer<'a>,
    stmts: StmtRange,
}

impl<'a> ProgramDisplay<'a> {
    pub(crate) fn new(
        arena: &'a ExprArena,
        stmts: StmtRange,
        interner: &'a StringInterner,
    ) -> Self {
        ProgramDisplay {
            renderer: Renderer { arena, interner },
            stmts,
        }
    }
}

impl Display for ProgramDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let stmts = self.renderer.arena.stmt_list(self.stmts);
        self.renderer.stmts(f, stmts)
    }
}

/// Canonical rendering of a single expression.
pub struct ExprDisplay<'a> {
    renderer: Renderer<'a>,
    id: ExprId,
}

impl<'a> ExprDisplay<'a> {
    pub fn new(arena: &'a ExprArena, id: ExprId, interner: &'a StringInterner) -> Self {
        ExprDisplay {
            renderer: Renderer { arena, interner },
            id,
        }
    }
}

impl Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.renderer.expr(f, self.id)
    }
}

/// Canonical rendering of a braced block, used for function bodies.
pub struct BlockDisplay<'a> {
    renderer: Renderer<'a>,
    block: Block,
}

impl<'a> BlockDisplay<'a> {
    pub fn new(arena: &'a ExprArena, block: Block, interner: &'a StringInterner) -> Self {
        BlockDisplay {
            renderer: Renderer { arena, interner },
            block,
        }
    }
}

impl Display for BlockDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.renderer.block(f, self.block)
    }
}
