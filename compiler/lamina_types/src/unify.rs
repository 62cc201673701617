//! Unification solver.
//!
//! Consumes an ordered constraint list and produces a single idempotent
//! substitution, or the first failure.
//!
//! # Algorithm
//!
//! The current substitution `S` is threaded left to right. For each pair:
//!
//! ```text
//! 1. apply S to both sides
//! 2. same base type                  => ok
//! 3. variable v vs t:
//!      t == v                        => ok
//!      v occurs in t                 => InfiniteType(v, t)
//!      otherwise                     => S := S[v ↦ t]
//! 4. a1 -> r1  vs  a2 -> r2          => unify a1 a2, then r1 r2 under the new S
//! 5. N<xs>     vs  N<ys>             => same name and arity, pairwise
//! 6. (xs)      vs  (ys)              => same arity, elementwise
//! 7. anything else                   => Mismatch
//! ```
//!
//! Because step 1 runs for every pair, a new binding is visible to every
//! constraint not yet processed.
//!
//! # Usage
//!
//! ```ignore
//! let solution = solve(ctx.constraints())?;
//! let principal = solution.apply(&ty);
//! ```

use lamina_stack::ensure_sufficient_stack;

use crate::{Constraint, Substitution, Type, TypeError, TypeVar};

/// Solve a constraint list with a fresh solver.
#[tracing::instrument(level = "trace", skip_all, fields(count = constraints.len()))]
pub fn solve(constraints: &[Constraint]) -> Result<Substitution, TypeError> {
    let mut unifier = Unifier::new();
    unifier.solve(constraints)?;
    Ok(unifier.into_substitution())
}

/// The unification engine.
#[derive(Debug, Default)]
pub struct Unifier {
    /// Accumulated substitution, kept idempotent.
    subst: Substitution,
}

impl Unifier {
    /// Create a new unifier with an empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// The substitution built so far.
    pub fn substitution(&self) -> &Substitution {
        &self.subst
    }

    /// Consume the unifier, yielding its substitution.
    pub fn into_substitution(self) -> Substitution {
        self.subst
    }

    /// Solve each constraint in order, stopping at the first failure.
    pub fn solve(&mut self, constraints: &[Constraint]) -> Result<(), TypeError> {
        for constraint in constraints {
            self.unify(&constraint.lhs, &constraint.rhs)?;
        }
        Ok(())
    }

    /// Unify two types, extending the substitution.
    pub fn unify(&mut self, lhs: &Type, rhs: &Type) -> Result<(), TypeError> {
        ensure_sufficient_stack(|| self.unify_inner(lhs, rhs))
    }

    fn unify_inner(&mut self, lhs: &Type, rhs: &Type) -> Result<(), TypeError> {
        let lhs = self.subst.apply(lhs);
        let rhs = self.subst.apply(rhs);

        match (&lhs, &rhs) {
            // Same base type (and identical terms in general)
            _ if lhs == rhs => Ok(()),

            (Type::Var(v), other) | (other, Type::Var(v)) => self.bind(*v, other),

            (
                Type::Function { param: p1, ret: r1 },
                Type::Function { param: p2, ret: r2 },
            ) => {
                self.unify(p1, p2)?;
                self.unify(r1, r2)
            }

            (
                Type::Applied { name: n1, args: a1 },
                Type::Applied { name: n2, args: a2 },
            ) if n1 == n2 && a1.len() == a2.len() => {
                for (x, y) in a1.iter().zip(a2) {
                    self.unify(x, y)?;
                }
                Ok(())
            }

            (Type::Tuple(xs), Type::Tuple(ys)) if xs.len() == ys.len() => {
                for (x, y) in xs.iter().zip(ys) {
                    self.unify(x, y)?;
                }
                Ok(())
            }

            _ => Err(TypeError::Mismatch { lhs, rhs }),
        }
    }

    /// Bind `var` to `ty` after the occurs check.
    ///
    /// `ty` already has the current substitution applied and is not `var`
    /// itself (that case is caught by the equality test in `unify`).
    fn bind(&mut self, var: TypeVar, ty: &Type) -> Result<(), TypeError> {
        if ty.contains_var(var) {
            return Err(TypeError::InfiniteType {
                var,
                ty: ty.clone(),
            });
        }
        tracing::trace!(%var, ?ty, "bind");
        self.subst.bind(var, ty.clone());
        Ok(())
    }
}
