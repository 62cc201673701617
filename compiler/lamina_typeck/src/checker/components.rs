//! Component structs for `TypeChecker` organization.
//!
//! - `CheckContext`: immutable references to the arena, interner and the
//!   nominal member table
//! - `InferenceState`: fresh variables, the current run's constraints and
//!   their incremental solution, and the environment

use lamina_ir::{ExprArena, StringInterner};
use lamina_types::{
    InferenceContext, Substitution, TypeDeclarations, TypeEnv, TypeError, Unifier,
};

/// Context references for type checking.
pub struct CheckContext<'a> {
    /// Expression arena for looking up expressions.
    pub arena: &'a ExprArena,
    /// String interner for names and nominal type identifiers.
    pub interner: &'a StringInterner,
    /// Members of nominal types, consulted by member access.
    pub declarations: &'a TypeDeclarations,
}

impl<'a> CheckContext<'a> {
    /// Create a new check context.
    pub fn new(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        declarations: &'a TypeDeclarations,
    ) -> Self {
        Self {
            arena,
            interner,
            declarations,
        }
    }
}

/// Type inference state.
///
/// A run is one `infer` or `define` call. Constraints and their solution
/// belong to a run; the environment and the variable counter outlive it.
#[derive(Debug, Default)]
pub struct InferenceState {
    /// Fresh variables and the constraint list.
    pub ctx: InferenceContext,
    /// Current bindings. Scopes extend it in place and undo on exit.
    pub env: TypeEnv,
    /// Solution of the constraints fed in so far.
    solver: Unifier,
    /// Prefix of `ctx.constraints()` already fed to `solver`.
    solved: usize,
}

impl InferenceState {
    /// Create an inference state over an initial environment.
    ///
    /// Fresh variables start above every variable free in `env` or in
    /// `declarations`, so inference never reuses one of them by accident.
    pub fn with_env(env: TypeEnv, declarations: &TypeDeclarations) -> Self {
        let mut ctx = InferenceContext::new();
        ctx.reserve(env.free_vars());
        ctx.reserve(declarations.free_vars());
        Self {
            ctx,
            env,
            ..Self::default()
        }
    }

    /// Start a new run, dropping the previous run's constraints and solution.
    pub fn begin_run(&mut self) {
        self.ctx.clear_constraints();
        self.solver = Unifier::new();
        self.solved = 0;
    }

    /// Constraints generated but not yet solved.
    pub fn pending(&self) -> usize {
        self.ctx.constraints().len().saturating_sub(self.solved)
    }

    /// Feed the constraints generated since the last call to the solver.
    ///
    /// Earlier constraints are never revisited; their bindings already live
    /// in [`InferenceState::solution`].
    pub fn solve_pending(&mut self) -> Result<(), TypeError> {
        let constraints = self.ctx.constraints();
        self.solver
            .solve(constraints.get(self.solved..).unwrap_or_default())?;
        self.solved = constraints.len();
        Ok(())
    }

    /// Solution of every constraint solved so far in this run.
    pub fn solution(&self) -> &Substitution {
        self.solver.substitution()
    }

    /// Apply the current solution to the environment.
    ///
    /// Needed before the run's constraints are dropped whenever the
    /// environment outlives the run.
    pub fn commit_solution(&mut self) {
        if !self.solution().is_empty() {
            self.env = self.solution().apply_env(&self.env);
        }
    }
}
