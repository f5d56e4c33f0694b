//! Thread-local pipeline context for crash reports.
//!
//! Evaluation runs on rayon workers, so each thread keeps its own context.
//! Guards restore the previous value on drop, which allows nesting an
//! architecture inside a phase.
//!
//! Recovery scopes are counted process-wide instead, so a panic on a rayon
//! worker is still seen as recoverable while the calling thread waits.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

static RECOVERY_SCOPES: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<PipelineContext> = const { RefCell::new(PipelineContext::new()) };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineContext {
    pub phase: Option<PipelinePhase>,
    pub architecture: Option<&'static str>,
}

impl PipelineContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            architecture: None,
        }
    }
}

/// Major stages of a recommendation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    ConfigLoading,
    Normalization,
    Evaluation,
    Ranking,
    PatternMatching,
    Reasoning,
    FeedbackRecording,
    OutputGeneration,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigLoading => write!(f, "config_loading"),
            Self::Normalization => write!(f, "normalization"),
            Self::Evaluation => write!(f, "evaluation"),
            Self::Ranking => write!(f, "ranking"),
            Self::PatternMatching => write!(f, "pattern_matching"),
            Self::Reasoning => write!(f, "reasoning"),
            Self::FeedbackRecording => write!(f, "feedback_recording"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// Restores the previous context when dropped.
pub struct ContextGuard {
    previous: PipelineContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

#[must_use]
pub fn set_phase(phase: PipelinePhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_architecture(id: &'static str) -> ContextGuard {
    update(|ctx| ctx.architecture = Some(id))
}

fn update(apply: impl FnOnce(&mut PipelineContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut *ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn get_current_context() -> PipelineContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Marks a region whose panics are caught and reported by the caller.
pub struct RecoveryGuard {
    _private: (),
}

impl Drop for RecoveryGuard {
    fn drop(&mut self) {
        RECOVERY_SCOPES.fetch_sub(1, Ordering::SeqCst);
    }
}

#[must_use]
pub fn enter_recovery_scope() -> RecoveryGuard {
    RECOVERY_SCOPES.fetch_add(1, Ordering::SeqCst);
    RecoveryGuard { _private: () }
}

/// True while any recovery scope is open.
pub fn in_recovery_scope() -> bool {
    RECOVERY_SCOPES.load(Ordering::SeqCst) > 0
}
