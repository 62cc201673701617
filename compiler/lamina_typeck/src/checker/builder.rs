//! Builder pattern for `TypeChecker` construction.

use std::sync::OnceLock;

use lamina_ir::{ExprArena, StringInterner};
use lamina_types::{TypeDeclarations, TypeEnv};

use super::components::{CheckContext, InferenceState};
use super::TypeChecker;

/// Builder for creating `TypeChecker` instances.
pub struct TypeCheckerBuilder<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    env: Option<TypeEnv>,
    declarations: Option<&'a TypeDeclarations>,
}

impl<'a> TypeCheckerBuilder<'a> {
    /// Create a new builder with required references.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            interner,
            env: None,
            declarations: None,
        }
    }

    /// Start from an initial environment instead of an empty one.
    #[must_use]
    pub fn with_env(mut self, env: TypeEnv) -> Self {
        self.env = Some(env);
        self
    }

    /// Set the member table for nominal types.
    #[must_use]
    pub fn with_declarations(mut self, declarations: &'a TypeDeclarations) -> Self {
        self.declarations = Some(declarations);
        self
    }

    /// Build the `TypeChecker` with the configured options.
    pub fn build(self) -> TypeChecker<'a> {
        let declarations = self.declarations.unwrap_or(no_declarations());
        let context = CheckContext::new(self.arena, self.interner, declarations);
        let inference = InferenceState::with_env(self.env.unwrap_or_default(), declarations);

        TypeChecker { context, inference }
    }
}

fn no_declarations() -> &'static TypeDeclarations {
    static EMPTY: OnceLock<TypeDeclarations> = OnceLock::new();
    EMPTY.get_or_init(TypeDeclarations::new)
}
