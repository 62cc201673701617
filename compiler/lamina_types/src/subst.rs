//! Substitutions: finite maps from type variables to types.

use rustc_hash::FxHashMap;

use crate::{Type, TypeEnv, TypeFolder, TypeScheme, TypeVar};

/// A finite map from type variables to types.
///
/// Kept idempotent: no image mentions a variable of the domain, so applying
/// a substitution twice gives the same result as applying it once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    map: FxHashMap<TypeVar, Type>,
}

impl Substitution {
    /// Create the empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitution with a single binding.
    pub fn singleton(var: TypeVar, ty: Type) -> Self {
        let mut map = FxHashMap::default();
        map.insert(var, ty);
        Substitution { map }
    }

    /// Binding for `var`, if any.
    pub fn get(&self, var: TypeVar) -> Option<&Type> {
        self.map.get(&var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeVar, &Type)> {
        self.map.iter().map(|(v, t)| (*v, t))
    }

    /// Extend with `var ↦ ty`, rewriting existing images so the result stays
    /// idempotent.
    ///
    /// The caller guarantees `var` does not occur in `ty` (occurs check) and
    /// that `ty` has already had this substitution applied.
    pub fn bind(&mut self, var: TypeVar, ty: Type) {
        let single = Substitution::singleton(var, ty.clone());
        for image in self.map.values_mut() {
            if image.contains_var(var) {
                *image = single.apply(image);
            }
        }
        self.map.insert(var, ty);
    }

    /// Apply to a type, replacing every occurrence of every bound variable.
    pub fn apply(&self, ty: &Type) -> Type {
        if self.map.is_empty() {
            return ty.clone();
        }
        Applier { subst: self }.fold(ty)
    }

    /// Apply to a scheme's body, leaving its quantified variables alone.
    pub fn apply_scheme(&self, scheme: &TypeScheme) -> TypeScheme {
        if scheme.vars.iter().any(|v| self.map.contains_key(v)) {
            let mut narrowed = self.clone();
            for v in &scheme.vars {
                narrowed.map.remove(v);
            }
            TypeScheme::poly(scheme.vars.clone(), narrowed.apply(&scheme.ty))
        } else {
            TypeScheme::poly(scheme.vars.clone(), self.apply(&scheme.ty))
        }
    }

    /// Apply to every scheme of an environment.
    pub fn apply_env(&self, env: &TypeEnv) -> TypeEnv {
        let mut out = TypeEnv::new();
        for (name, scheme) in env.iter() {
            out.bind_scheme(name, self.apply_scheme(scheme));
        }
        out
    }

    /// Compose: `self.compose(other).apply(t) == other.apply(&self.apply(t))`.
    ///
    /// Bindings of `self` are rewritten by `other`; bindings of `other` for
    /// variables `self` does not bind are added.
    #[must_use]
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut map: FxHashMap<TypeVar, Type> = self
            .map
            .iter()
            .map(|(v, t)| (*v, other.apply(t)))
            .collect();
        for (v, t) in &other.map {
            map.entry(*v).or_insert_with(|| t.clone());
        }
        Substitution { map }
    }
}

struct Applier<'a> {
    subst: &'a Substitution,
}

impl TypeFolder for Applier<'_> {
    fn fold_var(&mut self, var: TypeVar) -> Type {
        self.subst.map.get(&var).cloned().unwrap_or(Type::Var(var))
    }
}
