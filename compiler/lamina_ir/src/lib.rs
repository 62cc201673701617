//! Lamina IR - expression trees handed to the type checker.
//!
//! This crate contains the data structures the front end produces and the
//! type checker consumes:
//! - Names for interned identifiers
//! - `ExprId`/`ExprRange` handles into a flat expression arena
//! - Expression nodes (`Expr`, `ExprKind`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!
//! Float literals are stored as `u64` bits so every node stays `Eq + Hash`.

mod arena;
mod ast;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use ast::{Expr, ExprKind};
pub use expr_id::{ExprId, ExprRange};
pub use interner::{InternError, StringInterner};
pub use name::Name;
