//! Control flow expression type inference.

use super::infer_expr;
use crate::checker::TypeChecker;
use lamina_ir::ExprId;
use lamina_types::{Type, TypeError};

/// Infer type for a ternary expression.
///
/// The then-branch is inferred first and its type is the result; the
/// condition must be `bool` and the else-branch must agree with the
/// then-branch.
pub fn infer_ternary(
    checker: &mut TypeChecker<'_>,
    cond: ExprId,
    then_branch: ExprId,
    else_branch: ExprId,
) -> Result<Type, TypeError> {
    let then_ty = infer_expr(checker, then_branch)?;
    let cond_ty = infer_expr(checker, cond)?;
    let else_ty = infer_expr(checker, else_branch)?;

    let ctx = &mut checker.inference.ctx;
    ctx.constrain(cond_ty, Type::Bool);
    ctx.constrain(else_ty, then_ty.clone());

    Ok(then_ty)
}
