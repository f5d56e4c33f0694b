//! Logging setup and crash reporting.
//!
//! The binary calls [`init_logging`] and [`install_panic_hook`] before doing
//! any work. Library code only emits through `log` and `tracing` and sets the
//! pipeline phase so a crash report can say where it happened.

pub mod context;
pub mod logging;
pub mod panic_hook;

pub use context::{
    enter_recovery_scope, get_current_context, in_recovery_scope, set_current_architecture,
    set_phase, ContextGuard, PipelineContext, PipelinePhase, RecoveryGuard,
};
pub use logging::{init_logging, level_for_verbosity};
pub use panic_hook::install_panic_hook;
