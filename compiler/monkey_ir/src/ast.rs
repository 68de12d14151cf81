//! Flat AST for Monkey programs.
//!
//! Nodes refer to their children through [`ExprId`] / [`StmtId`] indices into
//! an [`ExprArena`](crate::ExprArena) instead of boxes. Child lists (call
//! arguments, array elements, block statements, parameters, hash entries)
//! are stored contiguously in the arena and addressed by a [`ListRange`].

mod display;
mod expr;
mod ids;
mod operators;
mod program;
mod stmt;

pub use display::{BlockDisplay, ExprDisplay, ProgramDisplay};
pub use expr::{Block, Expr, ExprKind, HashEntry};
pub use ids::{ExprId, ExprRange, HashEntryRange, ListRange, ParamRange, StmtId, StmtRange};
pub use operators::{BinaryOp, UnaryOp};
pub use program::Program;
pub use stmt::{Stmt, StmtKind};
