//! Type environment for name resolution, and nominal member tables.

use lamina_ir::Name;
use rustc_hash::FxHashMap;

use crate::{Type, TypeScheme, TypeVar};

/// Type environment.
///
/// Maps names to type schemes. Scoping is done by the caller: extend with
/// [`TypeEnv::replace`] and undo with [`TypeEnv::restore`] once the scope
/// ends, on every exit path.
///
/// # Usage
///
/// ```ignore
/// let mut env = TypeEnv::new();
/// env.bind(increment, Type::function(Type::Int, Type::Int));
///
/// let saved = env.replace(x, TypeScheme::mono(param_ty));
/// let result = infer_body(&mut env);
/// env.restore(x, saved);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeEnv {
    /// Name → type scheme bindings.
    bindings: FxHashMap<Name, TypeScheme>,
}

impl TypeEnv {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name to a monomorphic type.
    pub fn bind(&mut self, name: Name, ty: Type) {
        self.bindings.insert(name, TypeScheme::mono(ty));
    }

    /// Bind a name to a polymorphic type scheme.
    pub fn bind_scheme(&mut self, name: Name, scheme: TypeScheme) {
        self.bindings.insert(name, scheme);
    }

    /// Bind a name and hand back whatever it shadowed.
    #[must_use = "the shadowed binding must be passed to `restore`"]
    pub fn replace(&mut self, name: Name, scheme: TypeScheme) -> Option<TypeScheme> {
        self.bindings.insert(name, scheme)
    }

    /// Undo a [`TypeEnv::replace`]: reinstate the shadowed binding, or
    /// remove the name if there was none.
    pub fn restore(&mut self, name: Name, previous: Option<TypeScheme>) {
        match previous {
            Some(scheme) => {
                self.bindings.insert(name, scheme);
            }
            None => {
                self.bindings.remove(&name);
            }
        }
    }

    /// Look up a name.
    ///
    /// Returns the type scheme; instantiate it to get a usable type.
    pub fn lookup(&self, name: Name) -> Option<&TypeScheme> {
        self.bindings.get(&name)
    }

    /// Remove a binding, returning it.
    pub fn remove(&mut self, name: Name) -> Option<TypeScheme> {
        self.bindings.remove(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bound names.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.bindings.keys().copied()
    }

    /// Iterate over all bindings.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &TypeScheme)> {
        self.bindings.iter().map(|(n, s)| (*n, s))
    }

    /// Collect all free type variables in the environment.
    ///
    /// Variables quantified by a scheme are not free; everything else
    /// mentioned by a binding is.
    pub fn free_vars(&self) -> Vec<TypeVar> {
        let mut vars = Vec::new();
        for scheme in self.bindings.values() {
            for v in scheme.free_vars() {
                if !vars.contains(&v) {
                    vars.push(v);
                }
            }
        }
        vars
    }

    /// Generalize a type to a type scheme by quantifying over its free
    /// variables that are not free in this environment.
    ///
    /// `Gen(Γ, τ) = ∀(FV(τ) - FV(Γ)). τ`
    pub fn generalize(&self, ty: &Type) -> TypeScheme {
        let env_vars = self.free_vars();
        let quantified: Vec<TypeVar> = ty
            .free_vars()
            .into_iter()
            .filter(|v| !env_vars.contains(v))
            .collect();

        if quantified.is_empty() {
            TypeScheme::mono(ty.clone())
        } else {
            TypeScheme::poly(quantified, ty.clone())
        }
    }
}

impl FromIterator<(Name, TypeScheme)> for TypeEnv {
    fn from_iter<I: IntoIterator<Item = (Name, TypeScheme)>>(iter: I) -> Self {
        TypeEnv {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// Members exposed by nominal types.
///
/// Maps a nominal type identifier (`String`, `User`, ...) to an environment
/// of member name → scheme. Consulted only at member-access sites.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeDeclarations {
    types: FxHashMap<Name, TypeEnv>,
}

impl TypeDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `member` on `type_name`, replacing an earlier declaration.
    pub fn declare(&mut self, type_name: Name, member: Name, scheme: TypeScheme) {
        self.types
            .entry(type_name)
            .or_default()
            .bind_scheme(member, scheme);
    }

    /// All members of a type.
    pub fn members(&self, type_name: Name) -> Option<&TypeEnv> {
        self.types.get(&type_name)
    }

    /// Look up one member of a type.
    pub fn lookup_member(&self, type_name: Name, member: Name) -> Option<&TypeScheme> {
        self.types.get(&type_name)?.lookup(member)
    }

    /// Check whether any member is declared for the type.
    pub fn has_type(&self, type_name: Name) -> bool {
        self.types.contains_key(&type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Free type variables of every member scheme.
    pub fn free_vars(&self) -> Vec<TypeVar> {
        let mut vars = Vec::new();
        for v in self.types.values().flat_map(TypeEnv::free_vars) {
            if !vars.contains(&v) {
                vars.push(v);
            }
        }
        vars
    }
}

#[cfg(test)]
mod tests;
