//! Scoped environment extension for `TypeChecker`.
//!
//! The shadowed binding is put back after the closure returns, whatever it
//! returned, so early `?` exits inside a scope cannot leak bindings.

use lamina_ir::Name;
use lamina_types::TypeScheme;

use super::TypeChecker;

impl TypeChecker<'_> {
    /// Execute a closure with `name` bound to `scheme`.
    ///
    /// Any outer binding of `name` is shadowed for the duration of the
    /// closure and restored afterwards; if there was none, `name` is
    /// removed again. Used for lambda parameters and `let` bodies.
    pub fn with_binding<T, F>(&mut self, name: Name, scheme: TypeScheme, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        // Save current state
        let previous = self.inference.env.replace(name, scheme);

        // Execute closure
        let result = f(self);

        // Restore state
        self.inference.env.restore(name, previous);

        result
    }
}
