//! Shared data model for the Monkey interpreter.
//!
//! Everything the lexer, parser and evaluator pass between each other lives
//! here:
//!
//! - [`Span`]: byte range into the source text
//! - [`Name`] / [`StringInterner`]: interned identifiers and string literals
//! - [`Token`] / [`TokenKind`] / [`TokenList`]: the lexer's output alphabet
//! - [`ExprArena`] and the AST node types: the parser's output
//! - canonical rendering of programs and expressions back to source text

mod arena;
pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, SharedArena};
pub use ast::{
    BinaryOp, Block, BlockDisplay, Expr, ExprDisplay, ExprId, ExprKind, ExprRange, HashEntry,
    HashEntryRange, ListRange, ParamRange, Program, ProgramDisplay, Stmt, StmtId, StmtKind,
    StmtRange, UnaryOp,
};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
