//! Application type inference.

use super::infer_expr;
use crate::checker::TypeChecker;
use lamina_ir::ExprId;
use lamina_types::{Type, TypeError};

/// Infer type for a single-argument application.
///
/// The callee is not required to be a function yet: `typeof(func) ==
/// typeof(arg) -> r` is recorded and the solver decides.
pub fn infer_apply(
    checker: &mut TypeChecker<'_>,
    func: ExprId,
    arg: ExprId,
) -> Result<Type, TypeError> {
    let func_ty = infer_expr(checker, func)?;
    let arg_ty = infer_expr(checker, arg)?;

    let ret = checker.inference.ctx.fresh_var();
    checker
        .inference
        .ctx
        .constrain(func_ty, Type::function(arg_ty, ret.clone()));

    Ok(ret)
}
