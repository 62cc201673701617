use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_alloc_and_get() {
    let mut arena = ExprArena::new();
    let id = arena.int(42);

    assert_eq!(id.index(), 0);
    assert_eq!(arena.get_expr(id).kind, ExprKind::Int(42));
    assert_eq!(arena.expr_count(), 1);
}

#[test]
fn test_ids_are_sequential() {
    let mut arena = ExprArena::new();
    let a = arena.bool(true);
    let b = arena.bool(false);
    assert_eq!(b.raw(), a.raw() + 1);
}

#[test]
fn test_expr_list_preserves_order() {
    let mut arena = ExprArena::new();
    let a = arena.int(1);
    let b = arena.int(2);
    let c = arena.int(3);

    let range = arena.alloc_expr_list([c, a, b]);
    assert_eq!(range.len(), 3);
    assert_eq!(arena.get_expr_list(range), &[c, a, b]);
}

#[test]
fn test_tuple_builder() {
    let mut arena = ExprArena::new();
    let a = arena.int(1);
    let b = arena.bool(true);
    let tuple = arena.tuple(&[a, b]);

    let ExprKind::Tuple(range) = arena.get_expr(tuple).kind else {
        panic!("expected tuple");
    };
    assert_eq!(arena.get_expr_list(range), &[a, b]);
}

#[test]
fn test_unit_tuple_is_empty_range() {
    let mut arena = ExprArena::new();
    let one = arena.int(1);
    arena.alloc_expr_list([one, one]);
    let unit = arena.tuple(&[]);

    let ExprKind::Tuple(range) = arena.get_expr(unit).kind else {
        panic!("expected tuple");
    };
    assert_eq!(range, ExprRange::EMPTY);
    assert!(range.is_empty());
    assert!(arena.get_expr_list(range).is_empty());
}

#[test]
fn test_float_stored_as_bits() {
    let mut arena = ExprArena::new();
    let id = arena.float(1.5);
    assert_eq!(arena.get_expr(id).kind, ExprKind::Float(1.5f64.to_bits()));
    assert!(arena.get_expr(id).kind.is_literal());
}

#[test]
fn test_lambda_children() {
    let mut arena = ExprArena::new();
    let x = Name::from_raw(10);
    let body = arena.ident(x);
    let lambda = arena.lambda(x, body);

    assert_eq!(
        arena.get_expr(lambda).kind,
        ExprKind::Lambda { param: x, body }
    );
    assert!(!arena.get_expr(lambda).kind.is_literal());
}
