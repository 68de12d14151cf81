use super::*;
use crate::ast::{ExprKind, StmtKind};
use crate::Span;

#[test]
fn test_alloc_expr() {
    let mut arena = ExprArena::new();
    let id = arena.alloc_expr(Expr::new(ExprKind::Int(42), Span::new(0, 2)));
    assert_eq!(arena.get_expr(id).kind, ExprKind::Int(42));
    assert_eq!(arena.expr_count(), 1);
}

#[test]
fn test_alloc_expr_list_is_contiguous() {
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::DUMMY));
    let b = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::DUMMY));
    let first = arena.alloc_expr_list([a]);
    let second = arena.alloc_expr_list([a, b]);
    assert_eq!(arena.get_expr_list(first), &[a]);
    assert_eq!(arena.get_expr_list(second), &[a, b]);
}

#[test]
fn test_empty_lists() {
    let mut arena = ExprArena::new();
    let range = arena.alloc_stmt_list([]);
    assert!(range.is_empty());
    assert!(arena.stmt_list(range).is_empty());
    assert!(arena.get_params(ListRange::EMPTY).is_empty());
}

#[test]
fn test_alloc_stmt_and_params() {
    let mut arena = ExprArena::new();
    let value = arena.alloc_expr(Expr::new(ExprKind::Bool(true), Span::DUMMY));
    let stmt = arena.alloc_stmt(Stmt::new(
        StmtKind::Let {
            name: Name::EMPTY,
            value,
        },
        Span::DUMMY,
    ));
    let params = arena.alloc_params([Name::EMPTY, Name::EMPTY]);
    assert!(matches!(arena.get_stmt(stmt).kind, StmtKind::Let { .. }));
    assert_eq!(params.len(), 2);
}

#[test]
fn test_shared_arena_derefs() {
    let mut arena = ExprArena::new();
    let id = arena.alloc_expr(Expr::new(ExprKind::Int(7), Span::DUMMY));
    let shared = SharedArena::new(arena);
    let clone = shared.clone();
    assert_eq!(clone.get_expr(id).kind, ExprKind::Int(7));
    assert_eq!(shared, clone);
}
