//! Type system for Lamina.
//!
//! The pieces of constraint-based Hindley-Milner inference that do not
//! depend on the shape of the expression tree:
//!
//! - `Type`, `TypeVar`, `TypeScheme`: the term language of types
//! - `TypeFolder` / `TypeVisitor`: structural recursion over types
//! - `Substitution`: variable → type maps and their application
//! - `TypeEnv`, `TypeDeclarations`: name → scheme bindings
//! - `InferenceContext`: per-run fresh variables, instantiation,
//!   generalization and the ordered constraint list
//! - `Unifier` / `solve`: turns constraints into a substitution
//!
//! All types have Clone, Eq and Hash; with the `cache` feature they also
//! serialize.

mod context;
mod core;
mod env;
mod error;
mod subst;
mod traverse;
mod unify;

pub use context::{Constraint, InferenceContext};
pub use core::{Type, TypeScheme, TypeVar};
pub use env::{TypeDeclarations, TypeEnv};
pub use error::TypeError;
pub use subst::Substitution;
pub use traverse::{TypeFolder, TypeVisitor};
pub use unify::{solve, Unifier};
