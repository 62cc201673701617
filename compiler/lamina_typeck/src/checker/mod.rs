//! Type checker core.
//!
//! # Module Structure
//!
//! - `components`: component structs for `TypeChecker` organization
//! - `builder`: `TypeChecker` builder pattern
//! - `scope_guards`: scoped environment extension
//! - `api`: public convenience functions

mod api;
mod builder;
pub mod components;
mod scope_guards;


pub use api::{infer, infer_definitions, infer_standalone, infer_with_env};
pub use builder::TypeCheckerBuilder;
pub use components::{CheckContext, InferenceState};

use lamina_ir::{ExprArena, ExprId, Name, StringInterner};
use lamina_types::{Constraint, Type, TypeEnv, TypeError, TypeScheme};

use crate::infer::{generalize_binding, infer_expr};

/// Type checker over one arena.
///
/// Every [`TypeChecker::infer`] and [`TypeChecker::define`] call is a
/// separate run with its own constraints, so a failed call leaves nothing
/// behind and the checker stays usable. What carries over is the
/// environment, extended by `define`, and the fresh-variable counter.
pub struct TypeChecker<'a> {
    /// Immutable references for expression and member lookup.
    pub(crate) context: CheckContext<'a>,
    /// Mutable inference state.
    pub(crate) inference: InferenceState,
}

impl<'a> TypeChecker<'a> {
    /// Create a type checker with an empty environment and no declarations.
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        TypeCheckerBuilder::new(arena, interner).build()
    }

    /// Current environment.
    pub fn env(&self) -> &TypeEnv {
        &self.inference.env
    }

    /// Consume the checker, yielding its environment.
    pub fn into_env(self) -> TypeEnv {
        self.inference.env
    }

    /// Constraints generated by the latest run.
    pub fn constraints(&self) -> &[Constraint] {
        self.inference.ctx.constraints()
    }

    /// Infer the principal type of `expr`.
    ///
    /// Variables left unconstrained stay in the result; compare such types
    /// with [`Type::alpha_eq`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn infer(&mut self, expr: ExprId) -> Result<Type, TypeError> {
        self.inference.begin_run();
        let ty = infer_expr(self, expr)?;
        self.inference.solve_pending()?;
        let principal = self.inference.solution().apply(&ty);
        tracing::debug!(
            constraints = self.constraints().len(),
            principal = %principal.display(self.context.interner),
            "inferred"
        );
        Ok(principal)
    }

    /// Infer `expr`, generalize it, and bind it as `name`.
    ///
    /// The binding is visible to everything inferred afterwards on this
    /// checker. `expr` itself cannot refer to `name` unless the environment
    /// already binds it.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn define(&mut self, name: Name, expr: ExprId) -> Result<TypeScheme, TypeError> {
        self.inference.begin_run();
        let ty = infer_expr(self, expr)?;
        let scheme = generalize_binding(self, &ty)?;
        // Monomorphic variables of earlier bindings may have been fixed here.
        self.inference.commit_solution();
        tracing::debug!(
            name = self.context.interner.lookup(name),
            quantified = scheme.vars.len(),
            "defined"
        );
        self.inference.env.bind_scheme(name, scheme.clone());
        Ok(scheme)
    }
}
