//! Binders: lambda parameters and `let`.
//!
//! Both extend the environment for the body only. Lambda parameters are
//! monomorphic; `let` values are generalized first, which is what makes
//! `let id = \x -> x in (id(0), id(true))` typecheck.

use super::infer_expr;
use crate::checker::TypeChecker;
use lamina_ir::{ExprId, Name};
use lamina_types::{Type, TypeError, TypeScheme};

/// Infer type for a lambda.
pub fn infer_lambda(
    checker: &mut TypeChecker<'_>,
    param: Name,
    body: ExprId,
) -> Result<Type, TypeError> {
    let param_ty = checker.inference.ctx.fresh_var();

    let body_ty = checker.with_binding(param, TypeScheme::mono(param_ty.clone()), |checker| {
        infer_expr(checker, body)
    })?;

    Ok(Type::function(param_ty, body_ty))
}

/// Infer type for `let name = value in body`.
///
/// Not recursive: `value` sees the binding of `name` from the enclosing
/// scope, if any.
pub fn infer_let(
    checker: &mut TypeChecker<'_>,
    name: Name,
    value: ExprId,
    body: ExprId,
) -> Result<Type, TypeError> {
    let value_ty = infer_expr(checker, value)?;
    let scheme = generalize_binding(checker, &value_ty)?;

    checker.with_binding(name, scheme, |checker| infer_expr(checker, body))
}

/// Generalize a binding's type against the current environment.
///
/// Solves the pending constraints first so that variables already fixed
/// are not quantified, and so that variables reachable from the
/// environment through the solution stay monomorphic.
pub(crate) fn generalize_binding(
    checker: &mut TypeChecker<'_>,
    ty: &Type,
) -> Result<TypeScheme, TypeError> {
    checker.inference.solve_pending()?;
    let solution = checker.inference.solution();
    let ty = solution.apply(ty);
    let env = solution.apply_env(&checker.inference.env);
    let scheme = env.generalize(&ty);

    tracing::trace!(
        ty = %ty.display(checker.context.interner),
        quantified = scheme.vars.len(),
        "generalized"
    );
    Ok(scheme)
}
