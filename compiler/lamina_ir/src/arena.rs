//! Arena allocation for the flat expression tree.
//!
//! - Contiguous storage for all expressions
//! - Child references use `ExprId` indices
//! - Tuple element lists use `ExprRange` into `expr_lists`

use super::ast::{Expr, ExprKind};
use super::{ExprId, ExprRange, Name};

/// Contiguous storage for all expressions of one tree.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (tuple elements).
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expression allocation =====

    /// Allocate expression, return ID.
    ///
    /// # Panics
    /// Panics if the arena holds more than `u32::MAX` expressions.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Expression list allocation =====

    /// Allocate expression list, return range.
    ///
    /// Every empty list is [`ExprRange::EMPTY`], wherever it was allocated.
    ///
    /// # Panics
    /// Panics if the list storage holds more than `u32::MAX` entries.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(exprs);
        if self.expr_lists.len() == start {
            return ExprRange::EMPTY;
        }
        let to_u32 = |n: usize| {
            u32::try_from(n).unwrap_or_else(|_| panic!("expression list storage exceeded u32::MAX"))
        };
        ExprRange::new(to_u32(start), to_u32(self.expr_lists.len() - start))
    }

    /// Get expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        let end = start + range.len();
        &self.expr_lists[start..end]
    }

    // ===== Node builders =====

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Bool(value)))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Int(value)))
    }

    pub fn float(&mut self, value: f64) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Float(value.to_bits())))
    }

    pub fn string(&mut self, value: Name) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Str(value)))
    }

    pub fn ident(&mut self, name: Name) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Ident(name)))
    }

    pub fn lambda(&mut self, param: Name, body: ExprId) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Lambda { param, body }))
    }

    pub fn apply(&mut self, func: ExprId, arg: ExprId) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Apply { func, arg }))
    }

    pub fn let_in(&mut self, name: Name, value: ExprId, body: ExprId) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Let { name, value, body }))
    }

    pub fn ternary(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Ternary {
            cond,
            then_branch,
            else_branch,
        }))
    }

    pub fn member(&mut self, receiver: ExprId, member: Name) -> ExprId {
        self.alloc_expr(Expr::new(ExprKind::Member { receiver, member }))
    }

    /// Allocate a tuple of the given elements; an empty slice is the unit value.
    pub fn tuple(&mut self, elements: &[ExprId]) -> ExprId {
        let range = self.alloc_expr_list(elements.iter().copied());
        self.alloc_expr(Expr::new(ExprKind::Tuple(range)))
    }
}

#[cfg(test)]
mod tests;
