//! Public API functions for type inference.

use lamina_ir::{ExprArena, ExprId, Name, StringInterner};
use lamina_types::{Type, TypeDeclarations, TypeEnv, TypeError};

use super::TypeCheckerBuilder;

/// Infer the principal type of `expr` under `env` and `declarations`.
pub fn infer(
    arena: &ExprArena,
    interner: &StringInterner,
    expr: ExprId,
    env: &TypeEnv,
    declarations: &TypeDeclarations,
) -> Result<Type, TypeError> {
    TypeCheckerBuilder::new(arena, interner)
        .with_env(env.clone())
        .with_declarations(declarations)
        .build()
        .infer(expr)
}

/// Infer with an environment and no nominal member declarations.
pub fn infer_with_env(
    arena: &ExprArena,
    interner: &StringInterner,
    expr: ExprId,
    env: &TypeEnv,
) -> Result<Type, TypeError> {
    TypeCheckerBuilder::new(arena, interner)
        .with_env(env.clone())
        .build()
        .infer(expr)
}

/// Infer with an empty environment and no declarations.
pub fn infer_standalone(
    arena: &ExprArena,
    interner: &StringInterner,
    expr: ExprId,
) -> Result<Type, TypeError> {
    TypeCheckerBuilder::new(arena, interner).build().infer(expr)
}

/// Infer a sequence of top-level definitions.
///
/// Each definition is inferred, generalized, and added to the environment
/// seen by the ones after it. Returns `env` extended with every definition,
/// or the first error.
pub fn infer_definitions(
    arena: &ExprArena,
    interner: &StringInterner,
    defs: &[(Name, ExprId)],
    env: &TypeEnv,
    declarations: &TypeDeclarations,
) -> Result<TypeEnv, TypeError> {
    let mut checker = TypeCheckerBuilder::new(arena, interner)
        .with_env(env.clone())
        .with_declarations(declarations)
        .build();

    for &(name, expr) in defs {
        checker.define(name, expr)?;
    }

    Ok(checker.into_env())
}
