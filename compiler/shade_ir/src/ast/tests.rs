use pretty_assertions::assert_eq;

use super::*;
use crate::{BinaryOp, Span};

#[test]
fn test_arena_alloc_and_get() {
    let mut arena = AstArena::new();
    let one = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::new(0, 1)));
    let two = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::new(4, 5)));
    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            left: one,
            op: BinaryOp::Add,
            right: two,
        },
        Span::new(0, 5),
    ));

    assert_eq!(arena.expr_count(), 3);
    assert_eq!(arena.expr(one).kind, ExprKind::Int(1));
    match &arena.expr(sum).kind {
        ExprKind::Binary { left, right, .. } => {
            assert_eq!(*left, one);
            assert_eq!(*right, two);
        }
        other => panic!("expected binary, got {other:?}"),
    }
}

#[test]
fn test_arena_rewind_drops_speculative_nodes() {
    let mut arena = AstArena::new();
    arena.alloc_expr(Expr::new(ExprKind::Bool(true), Span::new(0, 4)));
    let mark = arena.mark();
    let e = arena.alloc_expr(Expr::new(ExprKind::Int(7), Span::new(5, 6)));
    arena.alloc_stmt(Stmt::new(StmtKind::Expr(e), Span::new(5, 7)));
    assert_eq!(arena.expr_count(), 2);
    assert_eq!(arena.stmt_count(), 1);

    arena.rewind(mark);
    assert_eq!(arena.expr_count(), 1);
    assert_eq!(arena.stmt_count(), 0);
}
