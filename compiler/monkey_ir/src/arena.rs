//! Arena storage for the flat AST.
//!
//! One arena holds every node of a parsed program. Nodes reference each
//! other by index, and all child lists live in per-kind contiguous stores.

use crate::ast::{
    Expr, ExprId, ExprRange, HashEntry, HashEntryRange, ListRange, ParamRange, Stmt, StmtId,
    StmtRange,
};
use crate::Name;
use std::fmt;
use std::sync::Arc;

/// Convert an arena length to a `u32` index.
///
/// # Panics
/// Panics past `u32::MAX` nodes; no source that large can be lexed anyway.
#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena exceeded u32::MAX entries ({len})"))
}

fn alloc_list<T>(store: &mut Vec<T>, items: impl IntoIterator<Item = T>) -> ListRange<T> {
    let start = to_u32(store.len());
    store.extend(items);
    ListRange::new(start, to_u32(store.len()) - start)
}

/// Contiguous storage for all nodes of one program.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,

    /// Flattened call arguments and array elements.
    expr_lists: Vec<ExprId>,
    /// Flattened block bodies and the program's top level.
    stmt_lists: Vec<StmtId>,
    params: Vec<Name>,
    hash_entries: Vec<HashEntry>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// # Panics
    /// Panics if `id` did not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        alloc_list(&mut self.expr_lists, exprs)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.to_range()]
    }

    // ===== Statements =====

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        alloc_list(&mut self.stmt_lists, stmts)
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.to_range()]
    }

    // ===== Parameters and hash entries =====

    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Name>) -> ParamRange {
        alloc_list(&mut self.params, params)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.to_range()]
    }

    pub fn alloc_hash_entries(
        &mut self,
        entries: impl IntoIterator<Item = HashEntry>,
    ) -> HashEntryRange {
        alloc_list(&mut self.hash_entries, entries)
    }

    #[inline]
    pub fn get_hash_entries(&self, range: HashEntryRange) -> &[HashEntry] {
        &self.hash_entries[range.to_range()]
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExprArena {{ {} exprs, {} stmts, {} lists, {} params }}",
            self.exprs.len(),
            self.stmts.len(),
            self.expr_lists.len() + self.stmt_lists.len(),
            self.params.len()
        )
    }
}

/// Shared, immutable handle to a finished arena.
///
/// Function values keep their body's arena alive through one of these, so a
/// closure can outlive the program that defined it (a REPL line, say).
#[derive(Clone, PartialEq, Eq)]
pub struct SharedArena(Arc<ExprArena>);

impl SharedArena {
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Arc::new(arena))
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedArena({:?})", &*self.0)
    }
}

#[cfg(test)]
mod tests;
