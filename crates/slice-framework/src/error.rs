//! # Framework Errors
//!
//! Errors raised by the slice plumbing itself, as opposed to the domain errors each
//! application defines for its actions.

/// Errors that can occur while talking to a slice actor.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Slice closed")]
    SliceClosed,
    #[error("Slice dropped response channel")]
    SliceDropped,
    #[error("Side effect failed: {0}")]
    EffectFailed(Box<dyn std::error::Error + Send + Sync>),
}
