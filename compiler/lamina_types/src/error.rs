//! Type errors.

use lamina_ir::{Name, StringInterner};

use crate::{Type, TypeVar};

/// Type error.
///
/// Inference stops at the first one; a successful result means the
/// expression has no errors at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// Occurs check failure: `var` would have to contain itself.
    InfiniteType { var: TypeVar, ty: Type },
    /// Structurally incompatible types.
    Mismatch { lhs: Type, rhs: Type },
    /// Member access on a function.
    ArrowMember { member: Name },
    /// The nominal type declares no such member.
    UnknownMember { type_name: Name, member: Name },
    /// Identifier not bound in the environment.
    Unbound(Name),
    /// Member access on a receiver whose type is still unknown.
    IndeterminateReceiver { member: Name },
    /// Member access on a receiver shape that has no members (tuples).
    UnsupportedReceiver { receiver: Type, member: Name },
}

impl TypeError {
    /// Whether the error came out of the unification solver.
    pub fn is_unification_error(&self) -> bool {
        matches!(
            self,
            TypeError::InfiniteType { .. } | TypeError::Mismatch { .. }
        )
    }

    /// One-line message for logs and callers that render their own output.
    pub fn message(&self, interner: &StringInterner) -> String {
        match self {
            TypeError::InfiniteType { var, ty } => format!(
                "cannot construct infinite type: {var} = {}",
                ty.display(interner)
            ),
            TypeError::Mismatch { lhs, rhs } => format!(
                "type mismatch: `{}` does not unify with `{}`",
                lhs.display(interner),
                rhs.display(interner)
            ),
            TypeError::ArrowMember { member } => format!(
                "functions have no members (accessing `{}`)",
                interner.lookup(*member)
            ),
            TypeError::UnknownMember { type_name, member } => format!(
                "type `{}` has no member `{}`",
                interner.lookup(*type_name),
                interner.lookup(*member)
            ),
            TypeError::Unbound(name) => {
                format!("unknown identifier `{}`", interner.lookup(*name))
            }
            TypeError::IndeterminateReceiver { member } => format!(
                "cannot access `{}`: receiver type is not known here",
                interner.lookup(*member)
            ),
            TypeError::UnsupportedReceiver { receiver, member } => format!(
                "type `{}` does not support member access (accessing `{}`)",
                receiver.display(interner),
                interner.lookup(*member)
            ),
        }
    }
}
