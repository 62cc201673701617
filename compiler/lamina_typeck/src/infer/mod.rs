//! Type inference for expressions.
//!
//! Each rule returns the expression's type and appends the equality
//! constraints it could not decide on the spot. The first error aborts the
//! whole run.
//!
//! - `expressions`: identifiers, member access, tuples
//! - `call.rs`: application
//! - `control.rs`: ternaries
//! - `bindings.rs`: lambdas and `let`, the two binders

mod bindings;
mod call;
mod control;
mod expressions;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use bindings::*;
pub(crate) use bindings::generalize_binding;
pub use call::*;
pub use control::*;
pub use expressions::*;

use crate::checker::TypeChecker;
use crate::ensure_sufficient_stack;
use lamina_ir::{ExprId, ExprKind};
use lamina_types::{Type, TypeError};

/// Infer the type of an expression.
///
/// This is the main entry point for expression type inference.
/// It dispatches to specialized handlers based on expression kind.
///
/// Uses `ensure_sufficient_stack` to prevent stack overflow
/// on deeply nested expressions.
pub fn infer_expr(checker: &mut TypeChecker<'_>, expr_id: ExprId) -> Result<Type, TypeError> {
    ensure_sufficient_stack(|| infer_expr_inner(checker, expr_id))
}

/// Inner type inference logic (wrapped by `infer_expr` for stack safety).
#[tracing::instrument(level = "trace", skip(checker))]
fn infer_expr_inner(checker: &mut TypeChecker<'_>, expr_id: ExprId) -> Result<Type, TypeError> {
    let arena = checker.context.arena;
    let expr = arena.get_expr(expr_id);

    match &expr.kind {
        // Literals
        ExprKind::Bool(_) => Ok(Type::Bool),
        ExprKind::Int(_) => Ok(Type::Int),
        ExprKind::Float(_) => Ok(Type::Float),
        ExprKind::Str(_) => Ok(Type::Str),

        // Variable reference
        ExprKind::Ident(name) => infer_ident(checker, *name),

        // Binders
        ExprKind::Lambda { param, body } => infer_lambda(checker, *param, *body),
        ExprKind::Let { name, value, body } => infer_let(checker, *name, *value, *body),

        // Application
        ExprKind::Apply { func, arg } => infer_apply(checker, *func, *arg),

        // Ternary
        ExprKind::Ternary {
            cond,
            then_branch,
            else_branch,
        } => infer_ternary(checker, *cond, *then_branch, *else_branch),

        // Member access
        ExprKind::Member { receiver, member } => infer_member(checker, *receiver, *member),

        // Tuple
        ExprKind::Tuple(elements) => infer_tuple(checker, *elements),
    }
}
