//! Per-run inference state: fresh variables and the constraint list.

use rustc_hash::FxHashMap;

use crate::{Type, TypeFolder, TypeScheme, TypeVar};

/// Equality obligation between two types.
///
/// Constraints are solved in the order they were generated; the order only
/// decides which mismatch surfaces first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub lhs: Type,
    pub rhs: Type,
}

impl Constraint {
    pub fn new(lhs: Type, rhs: Type) -> Self {
        Constraint { lhs, rhs }
    }
}

/// Type inference context.
///
/// Owns the fresh-variable counter (starting at zero unless variables are
/// reserved) and the constraint list of the current run. The counter never
/// goes back, so clearing the constraints between runs cannot make a fresh
/// variable collide with one already stored in an environment.
#[derive(Debug, Default)]
pub struct InferenceContext {
    /// Next type variable ID.
    next_var: u32,
    /// Constraints in generation order.
    constraints: Vec<Constraint>,
}

impl InferenceContext {
    /// Create a new inference context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh type variable.
    pub fn fresh_var(&mut self) -> Type {
        Type::Var(self.fresh_type_var())
    }

    /// Create a fresh type variable handle.
    pub fn fresh_type_var(&mut self) -> TypeVar {
        let var = TypeVar::new(self.next_var);
        self.next_var += 1;
        var
    }

    /// Number of variables handed out so far.
    pub fn var_count(&self) -> u32 {
        self.next_var
    }

    /// Make every later fresh variable greater than each of `taken`.
    pub fn reserve(&mut self, taken: impl IntoIterator<Item = TypeVar>) {
        for var in taken {
            self.next_var = self.next_var.max(var.0.saturating_add(1));
        }
    }

    /// Record `lhs == rhs`.
    pub fn constrain(&mut self, lhs: Type, rhs: Type) {
        self.constraints.push(Constraint::new(lhs, rhs));
    }

    /// Constraints generated so far, in order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Forget the current run's constraints. The counter keeps going.
    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }

    /// Consume the context, yielding its constraints.
    pub fn into_constraints(self) -> Vec<Constraint> {
        self.constraints
    }

    /// Instantiate a type scheme by replacing quantified variables with
    /// fresh ones.
    ///
    /// Every call allocates new variables, so two uses of one polymorphic
    /// binding can be specialized independently.
    pub fn instantiate(&mut self, scheme: &TypeScheme) -> Type {
        if scheme.is_mono() {
            return scheme.ty.clone();
        }

        let fresh: FxHashMap<TypeVar, Type> = scheme
            .vars
            .iter()
            .map(|v| (*v, self.fresh_var()))
            .collect();

        Renamer { mapping: &fresh }.fold(&scheme.ty)
    }
}

struct Renamer<'a> {
    mapping: &'a FxHashMap<TypeVar, Type>,
}

impl TypeFolder for Renamer<'_> {
    fn fold_var(&mut self, var: TypeVar) -> Type {
        self.mapping.get(&var).cloned().unwrap_or(Type::Var(var))
    }
}
