//! Type traversal traits.
//!
//! Substitution, free-variable collection and the occurs check are all
//! written as folders or visitors over `Type`. Both dispatchers run under
//! `ensure_sufficient_stack`, so overriding the per-variant hooks keeps
//! deep types safe as long as nested types go back through `fold`/`visit`.

use lamina_ir::Name;
use lamina_stack::ensure_sufficient_stack;

use crate::core::{Type, TypeVar};

/// Trait for transforming types via structural recursion.
///
/// Override specific `fold_*` methods to customize behavior for particular
/// type variants. The default `fold` method dispatches to them.
///
/// # Example
/// ```ignore
/// struct Resolver<'a> {
///     substitution: &'a Substitution,
/// }
///
/// impl TypeFolder for Resolver<'_> {
///     fn fold_var(&mut self, var: TypeVar) -> Type {
///         self.substitution.get(var).cloned().unwrap_or(Type::Var(var))
///     }
/// }
/// ```
pub trait TypeFolder {
    /// Fold a type by dispatching to variant-specific methods.
    fn fold(&mut self, ty: &Type) -> Type {
        ensure_sufficient_stack(|| match ty {
            Type::Var(v) => self.fold_var(*v),
            Type::Function { param, ret } => self.fold_function(param, ret),
            Type::Tuple(elems) => self.fold_tuple(elems),
            Type::Applied { name, args } => self.fold_applied(*name, args),
            // Leaf types - return as-is
            Type::Bool | Type::Int | Type::Float | Type::Str => ty.clone(),
        })
    }

    /// Fold a type variable. Override to customize variable handling.
    fn fold_var(&mut self, var: TypeVar) -> Type {
        Type::Var(var)
    }

    /// Fold a function type. Default folds both sides.
    fn fold_function(&mut self, param: &Type, ret: &Type) -> Type {
        Type::Function {
            param: Box::new(self.fold(param)),
            ret: Box::new(self.fold(ret)),
        }
    }

    /// Fold a tuple type. Default folds every element.
    fn fold_tuple(&mut self, elems: &[Type]) -> Type {
        Type::Tuple(elems.iter().map(|t| self.fold(t)).collect())
    }

    /// Fold a nominal type. Default folds the arguments.
    fn fold_applied(&mut self, name: Name, args: &[Type]) -> Type {
        Type::Applied {
            name,
            args: args.iter().map(|a| self.fold(a)).collect(),
        }
    }
}

/// Trait for visiting types without modification.
///
/// # Example
/// ```ignore
/// struct FreeVarCollector {
///     vars: Vec<TypeVar>,
/// }
///
/// impl TypeVisitor for FreeVarCollector {
///     fn visit_var(&mut self, var: TypeVar) {
///         if !self.vars.contains(&var) {
///             self.vars.push(var);
///         }
///     }
/// }
/// ```
pub trait TypeVisitor {
    /// Visit a type by dispatching to variant-specific methods.
    fn visit(&mut self, ty: &Type) {
        ensure_sufficient_stack(|| match ty {
            Type::Var(v) => self.visit_var(*v),
            Type::Function { param, ret } => self.visit_function(param, ret),
            Type::Tuple(elems) => self.visit_tuple(elems),
            Type::Applied { name, args } => self.visit_applied(*name, args),
            // Leaf types - no-op by default
            Type::Bool | Type::Int | Type::Float | Type::Str => {}
        });
    }

    /// Visit a type variable. Override to handle variables.
    fn visit_var(&mut self, _var: TypeVar) {}

    /// Visit a function type. Default visits both sides.
    fn visit_function(&mut self, param: &Type, ret: &Type) {
        self.visit(param);
        self.visit(ret);
    }

    /// Visit a tuple type. Default visits every element.
    fn visit_tuple(&mut self, elems: &[Type]) {
        for t in elems {
            self.visit(t);
        }
    }

    /// Visit a nominal type. Default visits the arguments.
    fn visit_applied(&mut self, _name: Name, args: &[Type]) {
        for a in args {
            self.visit(a);
        }
    }
}
