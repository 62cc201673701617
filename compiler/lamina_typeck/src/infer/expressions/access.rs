//! Member access type inference.
//!
//! Members are looked up in the declaration table under the receiver's
//! nominal name: a constructor's own name, or `Bool`/`Int`/`Float`/`String`
//! for the base types. Functions and tuples have no members.

use super::super::infer_expr;
use crate::checker::TypeChecker;
use lamina_ir::{ExprId, Name};
use lamina_types::{Type, TypeError};

/// Infer type for `receiver.member`.
pub fn infer_member(
    checker: &mut TypeChecker<'_>,
    receiver: ExprId,
    member: Name,
) -> Result<Type, TypeError> {
    let receiver_ty = infer_expr(checker, receiver)?;
    let receiver_ty = resolve_receiver(checker, receiver_ty)?;

    let type_name = match &receiver_ty {
        Type::Var(_) => return Err(TypeError::IndeterminateReceiver { member }),
        Type::Function { .. } => return Err(TypeError::ArrowMember { member }),
        Type::Tuple(_) => {
            return Err(TypeError::UnsupportedReceiver {
                receiver: receiver_ty.clone(),
                member,
            })
        }
        Type::Applied { name, .. } => *name,
        Type::Bool | Type::Int | Type::Float | Type::Str => receiver_ty
            .nominal_name(checker.context.interner)
            .ok_or(TypeError::IndeterminateReceiver { member })?,
    };

    let scheme = checker
        .context
        .declarations
        .lookup_member(type_name, member)
        .ok_or(TypeError::UnknownMember { type_name, member })?;

    let ctx = &mut checker.inference.ctx;
    let member_ty = ctx.instantiate(scheme);
    let result = ctx.fresh_var();
    ctx.constrain(result.clone(), member_ty);

    Ok(result)
}

/// Resolve a variable receiver through the constraints gathered so far.
///
/// Any other shape is already known and returned as is.
fn resolve_receiver(checker: &mut TypeChecker<'_>, receiver_ty: Type) -> Result<Type, TypeError> {
    if !receiver_ty.is_var() {
        return Ok(receiver_ty);
    }
    checker.inference.solve_pending()?;
    Ok(checker.inference.solution().apply(&receiver_ty))
}
