//! Tests for the per-expression rules, checked before solving.

use super::*;
use lamina_ir::{ExprArena, StringInterner};
use lamina_types::{Constraint, TypeEnv, TypeScheme, TypeVar};
use pretty_assertions::assert_eq;

fn var(n: u32) -> Type {
    Type::Var(TypeVar::new(n))
}

#[test]
fn test_literals_emit_no_constraints() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let exprs = [
        (arena.bool(true), Type::Bool),
        (arena.int(0), Type::Int),
        (arena.float(1.5), Type::Float),
        (arena.string(interner.intern("s")), Type::Str),
    ];

    let mut checker = TypeChecker::new(&arena, &interner);
    for (id, expected) in exprs {
        assert_eq!(infer_expr(&mut checker, id).unwrap(), expected);
    }
    assert!(checker.constraints().is_empty());
}

#[test]
fn test_apply_constrains_callee() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let f = interner.intern("f");
    let callee = arena.ident(f);
    let arg = arena.int(1);
    let call = arena.apply(callee, arg);

    let mut env = TypeEnv::new();
    env.bind(f, Type::function(Type::Int, Type::Bool));
    let mut checker = crate::TypeCheckerBuilder::new(&arena, &interner)
        .with_env(env)
        .build();

    let ty = infer_expr(&mut checker, call).unwrap();
    assert_eq!(ty, var(0));
    assert_eq!(
        checker.constraints(),
        &[Constraint::new(
            Type::function(Type::Int, Type::Bool),
            Type::function(Type::Int, var(0)),
        )]
    );
}

#[test]
fn test_ternary_constraint_order() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let cond = arena.int(1);
    let then_branch = arena.string(interner.intern("then"));
    let else_branch = arena.bool(false);
    let ternary = arena.ternary(cond, then_branch, else_branch);

    let mut checker = TypeChecker::new(&arena, &interner);
    let ty = infer_expr(&mut checker, ternary).unwrap();

    assert_eq!(ty, Type::Str);
    assert_eq!(
        checker.constraints(),
        &[
            Constraint::new(Type::Int, Type::Bool),
            Constraint::new(Type::Bool, Type::Str),
        ]
    );
}

#[test]
fn test_lambda_type_before_solving() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let body = arena.ident(x);
    let lambda = arena.lambda(x, body);

    let mut checker = TypeChecker::new(&arena, &interner);
    let ty = infer_expr(&mut checker, lambda).unwrap();

    assert_eq!(ty, Type::function(var(0), var(0)));
    assert!(checker.constraints().is_empty());
    assert!(!checker.env().contains(x));
}

#[test]
fn test_ident_instantiates_per_reference() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let id = interner.intern("id");
    let a = arena.ident(id);
    let b = arena.ident(id);
    let pair = arena.tuple(&[a, b]);

    let bound = TypeVar::new(100);
    let mut env = TypeEnv::new();
    env.bind_scheme(
        id,
        TypeScheme::poly(vec![bound], Type::function(Type::Var(bound), Type::Var(bound))),
    );
    let mut checker = crate::TypeCheckerBuilder::new(&arena, &interner)
        .with_env(env)
        .build();

    let ty = infer_expr(&mut checker, pair).unwrap();
    assert_eq!(
        ty,
        Type::tuple(vec![
            Type::function(var(0), var(0)),
            Type::function(var(1), var(1)),
        ])
    );
}

#[test]
fn test_mono_binding_is_shared() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let a = arena.ident(x);
    let b = arena.ident(x);
    let pair = arena.tuple(&[a, b]);

    let mut env = TypeEnv::new();
    env.bind(x, var(7));
    let mut checker = crate::TypeCheckerBuilder::new(&arena, &interner)
        .with_env(env)
        .build();

    let ty = infer_expr(&mut checker, pair).unwrap();
    assert_eq!(ty, Type::tuple(vec![var(7), var(7)]));
}

#[test]
fn test_unbound_identifier() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let missing = interner.intern("missing");
    let expr = arena.ident(missing);

    let mut checker = TypeChecker::new(&arena, &interner);
    assert_eq!(
        infer_expr(&mut checker, expr),
        Err(TypeError::Unbound(missing))
    );
}

#[test]
fn test_let_generalizes_unconstrained_value() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let x = interner.intern("x");
    let id = interner.intern("id");
    let x_ref = arena.ident(x);
    let identity = arena.lambda(x, x_ref);
    let id_ref = arena.ident(id);
    let expr = arena.let_in(id, identity, id_ref);

    let mut checker = TypeChecker::new(&arena, &interner);
    let ty = infer_expr(&mut checker, expr).unwrap();

    // ?0 is the lambda parameter; the body reference is a fresh copy.
    assert_eq!(ty, Type::function(var(1), var(1)));
    assert!(!checker.env().contains(id));
}

#[test]
fn test_generalize_binding_keeps_env_vars() {
    let interner = StringInterner::new();
    let arena = ExprArena::new();
    let y = interner.intern("y");

    let mut env = TypeEnv::new();
    env.bind(y, var(0));
    let mut checker = crate::TypeCheckerBuilder::new(&arena, &interner)
        .with_env(env)
        .build();

    let scheme = generalize_binding(&mut checker, &Type::function(var(0), var(1))).unwrap();
    assert_eq!(
        scheme,
        TypeScheme::poly(vec![TypeVar::new(1)], Type::function(var(0), var(1)))
    );
}

#[test]
fn test_fresh_vars_avoid_env_vars() {
    // \y -> a, with a: ?0 free in the environment
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let a = interner.intern("a");
    let y = interner.intern("y");
    let body = arena.ident(a);
    let lambda = arena.lambda(y, body);

    let mut env = TypeEnv::new();
    env.bind(a, var(0));
    let mut checker = crate::TypeCheckerBuilder::new(&arena, &interner)
        .with_env(env)
        .build();

    let ty = infer_expr(&mut checker, lambda).unwrap();
    assert_eq!(ty, Type::function(var(1), var(0)));
}

#[test]
fn test_deeply_nested_application() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let succ = interner.intern("succ");
    let mut expr = arena.int(0);
    for _ in 0..5_000 {
        let callee = arena.ident(succ);
        expr = arena.apply(callee, expr);
    }

    let mut env = TypeEnv::new();
    env.bind(succ, Type::function(Type::Int, Type::Int));
    let mut checker = crate::TypeCheckerBuilder::new(&arena, &interner)
        .with_env(env)
        .build();

    assert_eq!(checker.infer(expr).unwrap(), Type::Int);
}
