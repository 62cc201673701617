//! Identifier type inference.

use crate::checker::{InferenceState, TypeChecker};
use lamina_ir::Name;
use lamina_types::{Type, TypeError};

/// Infer type for an identifier.
///
/// Every reference instantiates the binding's scheme afresh, so each use
/// of a polymorphic name can be specialized independently.
pub fn infer_ident(checker: &mut TypeChecker<'_>, name: Name) -> Result<Type, TypeError> {
    let InferenceState { ctx, env, .. } = &mut checker.inference;
    let scheme = env.lookup(name).ok_or(TypeError::Unbound(name))?;
    Ok(ctx.instantiate(scheme))
}
