//! Core type definitions.

use std::fmt;
use std::hash::{Hash, Hasher};

use lamina_ir::{Name, StringInterner};
use lamina_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::TypeVisitor;

/// Type term.
///
/// `Clone`, `PartialEq`, `Hash` and `Drop` are written by hand so that
/// each level of nesting runs under `ensure_sufficient_stack`.
#[derive(Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    // ===== Base types =====
    /// Boolean type
    Bool,
    /// Integer type
    Int,
    /// Floating point type
    Float,
    /// String type
    Str,

    /// Type variable (for inference)
    Var(TypeVar),

    // ===== Compound types =====
    /// Function type: param -> ret
    Function { param: Box<Type>, ret: Box<Type> },

    /// Tuple type: (T, U, V). The empty tuple is the unit type.
    Tuple(Vec<Type>),

    /// Nominal type with its structural payload.
    /// For example, `Box<int>` is `Applied { name: "Box", args: [Int] }`.
    Applied { name: Name, args: Vec<Type> },
}

impl Type {
    /// Build a function type.
    pub fn function(param: Type, ret: Type) -> Self {
        Type::Function {
            param: Box::new(param),
            ret: Box::new(ret),
        }
    }

    /// Build a curried function type: `curried([a, b], r)` is `a -> b -> r`.
    pub fn curried<I>(params: I, ret: Type) -> Self
    where
        I: IntoIterator<Item = Type>,
        I::IntoIter: DoubleEndedIterator,
    {
        params
            .into_iter()
            .rev()
            .fold(ret, |acc, param| Type::function(param, acc))
    }

    /// Build a tuple type.
    pub fn tuple(elems: Vec<Type>) -> Self {
        Type::Tuple(elems)
    }

    /// The unit type `()`.
    pub fn unit() -> Self {
        Type::Tuple(Vec::new())
    }

    /// Build a nominal type.
    pub fn applied(name: Name, args: Vec<Type>) -> Self {
        Type::Applied { name, args }
    }

    /// Check if this is a base type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Bool | Type::Int | Type::Float | Type::Str)
    }

    /// Check if this is a type variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }

    /// Nominal identifier under which members of this type are declared.
    ///
    /// Base types are declared under `Bool`, `Int`, `Float` and `String`;
    /// nominal types under their own name. Other shapes have none.
    pub fn nominal_name(&self, interner: &StringInterner) -> Option<Name> {
        let base = match self {
            Type::Applied { name, .. } => return Some(*name),
            Type::Bool => "Bool",
            Type::Int => "Int",
            Type::Float => "Float",
            Type::Str => "String",
            Type::Var(_) | Type::Function { .. } | Type::Tuple(_) => return None,
        };
        Some(interner.intern(base))
    }

    /// Collect the free type variables, in first-occurrence order.
    pub fn free_vars(&self) -> Vec<TypeVar> {
        let mut collector = FreeVarCollector { vars: Vec::new() };
        collector.visit(self);
        collector.vars
    }

    /// Check if `var` occurs anywhere in this type.
    pub fn contains_var(&self, var: TypeVar) -> bool {
        struct Occurs {
            target: TypeVar,
            found: bool,
        }

        impl TypeVisitor for Occurs {
            fn visit_var(&mut self, var: TypeVar) {
                self.found |= var == self.target;
            }
        }

        let mut occurs = Occurs {
            target: var,
            found: false,
        };
        occurs.visit(self);
        occurs.found
    }

    /// Structural equality up to a consistent renaming of type variables.
    ///
    /// `?0 -> ?0` is alpha-equal to `?7 -> ?7` but not to `?1 -> ?2`.
    pub fn alpha_eq(&self, other: &Type) -> bool {
        fn go(
            a: &Type,
            b: &Type,
            fwd: &mut FxHashMap<TypeVar, TypeVar>,
            back: &mut FxHashMap<TypeVar, TypeVar>,
        ) -> bool {
            ensure_sufficient_stack(|| match (a, b) {
                (Type::Var(x), Type::Var(y)) => {
                    *fwd.entry(*x).or_insert(*y) == *y && *back.entry(*y).or_insert(*x) == *x
                }
                (
                    Type::Function { param: p1, ret: r1 },
                    Type::Function { param: p2, ret: r2 },
                ) => go(p1, p2, fwd, back) && go(r1, r2, fwd, back),
                (Type::Tuple(xs), Type::Tuple(ys)) => {
                    xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| go(x, y, fwd, back))
                }
                (
                    Type::Applied { name: n1, args: a1 },
                    Type::Applied { name: n2, args: a2 },
                ) => {
                    n1 == n2
                        && a1.len() == a2.len()
                        && a1.iter().zip(a2).all(|(x, y)| go(x, y, fwd, back))
                }
                _ => a == b,
            })
        }

        go(self, other, &mut FxHashMap::default(), &mut FxHashMap::default())
    }

    /// Format type for display.
    pub fn display(&self, interner: &StringInterner) -> String {
        ensure_sufficient_stack(|| match self {
            Type::Bool => "bool".to_string(),
            Type::Int => "int".to_string(),
            Type::Float => "float".to_string(),
            Type::Str => "str".to_string(),
            Type::Var(v) => v.to_string(),
            Type::Function { param, ret } => {
                format!("({}) -> {}", param.display(interner), ret.display(interner))
            }
            Type::Tuple(elems) => {
                let elems_str: Vec<_> = elems.iter().map(|t| t.display(interner)).collect();
                format!("({})", elems_str.join(", "))
            }
            Type::Applied { name, args } if args.is_empty() => interner.lookup(*name).to_string(),
            Type::Applied { name, args } => {
                let args_str: Vec<_> = args.iter().map(|a| a.display(interner)).collect();
                format!("{}<{}>", interner.lookup(*name), args_str.join(", "))
            }
        })
    }
}

impl Clone for Type {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Type::Bool => Type::Bool,
            Type::Int => Type::Int,
            Type::Float => Type::Float,
            Type::Str => Type::Str,
            Type::Var(v) => Type::Var(*v),
            Type::Function { param, ret } => Type::Function {
                param: param.clone(),
                ret: ret.clone(),
            },
            Type::Tuple(elems) => Type::Tuple(elems.clone()),
            Type::Applied { name, args } => Type::Applied {
                name: *name,
                args: args.clone(),
            },
        })
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Type::Bool, Type::Bool)
            | (Type::Int, Type::Int)
            | (Type::Float, Type::Float)
            | (Type::Str, Type::Str) => true,
            (Type::Var(a), Type::Var(b)) => a == b,
            (
                Type::Function { param: p1, ret: r1 },
                Type::Function { param: p2, ret: r2 },
            ) => p1 == p2 && r1 == r2,
            (Type::Tuple(xs), Type::Tuple(ys)) => xs == ys,
            (
                Type::Applied { name: n1, args: a1 },
                Type::Applied { name: n2, args: a2 },
            ) => n1 == n2 && a1 == a2,
            _ => false,
        })
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            std::mem::discriminant(self).hash(state);
            match self {
                Type::Var(v) => v.hash(state),
                Type::Function { param, ret } => {
                    param.hash(state);
                    ret.hash(state);
                }
                Type::Tuple(elems) => elems.hash(state),
                Type::Applied { name, args } => {
                    name.hash(state);
                    args.hash(state);
                }
                Type::Bool | Type::Int | Type::Float | Type::Str => {}
            }
        });
    }
}

impl Drop for Type {
    /// Detach the children and drop them on a guarded stack, so the
    /// compiler-generated glue only ever frees leaves.
    fn drop(&mut self) {
        match self {
            Type::Function { param, ret } => {
                let param = std::mem::replace(&mut **param, Type::Bool);
                let ret = std::mem::replace(&mut **ret, Type::Bool);
                ensure_sufficient_stack(move || drop((param, ret)));
            }
            Type::Tuple(elems) | Type::Applied { args: elems, .. } => {
                if !elems.is_empty() {
                    let elems = std::mem::take(elems);
                    ensure_sufficient_stack(move || drop(elems));
                }
            }
            Type::Bool | Type::Int | Type::Float | Type::Str | Type::Var(_) => {}
        }
    }
}

struct FreeVarCollector {
    vars: Vec<TypeVar>,
}

impl TypeVisitor for FreeVarCollector {
    fn visit_var(&mut self, var: TypeVar) {
        if !self.vars.contains(&var) {
            self.vars.push(var);
        }
    }
}

/// Type variable for inference.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeVar(pub u32);

impl TypeVar {
    pub fn new(id: u32) -> Self {
        TypeVar(id)
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// A type scheme (polymorphic type) with quantified type variables.
///
/// For example, the identity function has scheme
/// `TypeScheme { vars: [a], ty: a -> a }`.
///
/// Each use instantiates fresh type variables for the quantified ones.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeScheme {
    /// Quantified type variables (∀ these variables)
    pub vars: Vec<TypeVar>,
    /// The type, possibly mentioning variables free in the environment
    pub ty: Type,
}

impl TypeScheme {
    /// Create a monomorphic scheme (no quantified variables).
    pub fn mono(ty: Type) -> Self {
        TypeScheme {
            vars: Vec::new(),
            ty,
        }
    }

    /// Create a polymorphic scheme with the given quantified variables.
    pub fn poly(vars: Vec<TypeVar>, ty: Type) -> Self {
        TypeScheme { vars, ty }
    }

    /// Check if this is a monomorphic type (no quantified variables).
    pub fn is_mono(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables of the type that this scheme does not quantify.
    pub fn free_vars(&self) -> Vec<TypeVar> {
        let mut vars = self.ty.free_vars();
        vars.retain(|v| !self.vars.contains(v));
        vars
    }
}

impl From<Type> for TypeScheme {
    fn from(ty: Type) -> Self {
        TypeScheme::mono(ty)
    }
}
