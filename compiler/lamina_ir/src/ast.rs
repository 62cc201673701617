//! Expression Types
//!
//! Core expression nodes and variants. Children are `ExprId` indices into an
//! [`ExprArena`](crate::ExprArena), never boxes.

use std::fmt;

use crate::{ExprId, ExprRange, Name};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    // ===== Literals (no children) =====
    /// Boolean literal: true, false
    Bool(bool),

    /// Integer literal: 42
    Int(i64),

    /// Float literal: 3.14 (stored as bits for Hash)
    Float(u64),

    /// String literal (interned)
    Str(Name),

    // ===== Names and functions =====
    /// Identifier reference
    Ident(Name),

    /// Single-parameter lambda: `\param -> body`
    Lambda { param: Name, body: ExprId },

    /// Single-argument application: `func(arg)`
    Apply { func: ExprId, arg: ExprId },

    /// Let binding: `let name = value in body`
    Let {
        name: Name,
        value: ExprId,
        body: ExprId,
    },

    // ===== Control flow =====
    /// Ternary: `cond ? then_branch : else_branch`
    Ternary {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    // ===== Access and aggregates =====
    /// Member access: `receiver.member`
    Member { receiver: ExprId, member: Name },

    /// Tuple: `(a, b, c)`; the empty tuple is the unit value
    Tuple(ExprRange),
}

impl ExprKind {
    /// Check if this is a literal (no children, no environment access).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            ExprKind::Bool(_) | ExprKind::Int(_) | ExprKind::Float(_) | ExprKind::Str(_)
        )
    }
}
