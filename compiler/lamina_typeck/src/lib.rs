//! Lamina Typeck - Hindley-Milner type inference for Lamina expressions.
//!
//! Inference runs in two phases. The engine walks the expression tree once,
//! instantiating schemes from the environment and recording an equality
//! constraint for everything it cannot decide on the spot. The solver then
//! unifies the constraints in order; applying the resulting substitution to
//! the engine's type gives the principal type.
//!
//! # Main Entry Points
//!
//! - [`infer`], [`infer_with_env`], [`infer_standalone`]: one expression
//! - [`infer_definitions`]: a sequence of top-level bindings
//! - [`TypeChecker`] / [`TypeCheckerBuilder`]: the configurable form
//!
//! # Module Organization
//!
//! - `checker`: `TypeChecker`, its components and scope guards
//! - `infer`: per-expression inference rules

pub mod checker;
pub mod infer;

use std::sync::Once;

pub use checker::{
    // Convenience functions
    infer,
    infer_definitions,
    infer_standalone,
    infer_with_env,
    CheckContext,
    InferenceState,
    TypeChecker,
    TypeCheckerBuilder,
};
pub use lamina_stack::ensure_sufficient_stack;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for inference debugging.
///
/// Reads `RUST_LOG`; does nothing when it is unset. Safe to call more than
/// once.
///
/// ```bash
/// RUST_LOG=lamina_types=trace,lamina_typeck=debug cargo test -p lamina_typeck
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
