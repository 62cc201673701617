//! Stack growth for recursion over expression and type trees.
//!
//! Inference, unification, substitution and even `Clone`/`Drop` of a
//! `Type` recurse once per level of nesting. A chain of a few thousand
//! nested lambdas is enough to exhaust a 2 MiB test thread, so every such
//! recursion step goes through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is extended with `stacker`. On `wasm32` the
//! closure runs directly.

/// Grow once less than this much stack remains (256 KiB).
const RED_ZONE: usize = 256 * 1024;

/// Size of each newly allocated stack segment (2 MiB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; the wasm runtime owns the stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("unbound"));
        assert_eq!(result, Err("unbound"));
    }

    #[test]
    fn test_shallow_recursion() {
        assert_eq!(depth(16), 16);
    }

    #[test]
    fn test_recursion_past_thread_stack() {
        // Far beyond what a 2 MiB test thread holds without growth.
        assert_eq!(depth(200_000), 200_000);
    }
}
