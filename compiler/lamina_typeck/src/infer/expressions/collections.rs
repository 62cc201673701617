//! Collection literal type inference.

use super::super::infer_expr;
use crate::checker::TypeChecker;
use lamina_ir::ExprRange;
use lamina_types::{Type, TypeError};

/// Infer type for a tuple, element by element in order.
pub fn infer_tuple(checker: &mut TypeChecker<'_>, elements: ExprRange) -> Result<Type, TypeError> {
    let arena = checker.context.arena;
    let types = arena
        .get_expr_list(elements)
        .iter()
        .map(|&id| infer_expr(checker, id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Type::tuple(types))
}
