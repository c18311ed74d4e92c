//! # Slice Trait
//!
//! The `Slice` trait is the contract every partition of the state container implements
//! to be owned by a [`SliceActor`](crate::SliceActor). A slice is plain data plus a
//! synchronous reducer; anything that touches the outside world (persisting a session,
//! writing a cache) goes into the async [`Slice::on_event`] hook, which receives the
//! runtime context injected at `run()` time.
//!
//! # Architecture Note
//! Keeping `reduce` synchronous and infallible means the state a subscriber sees is always
//! the result of applying events in arrival order. The only way an event is *not* applied
//! is when its side effect fails, and in that case the dispatcher gets the error back.

use async_trait::async_trait;
use std::fmt::Debug;

/// A named partition of the state container.
///
/// # Associated Types
/// - `Event`: everything that can happen to this slice (usually one variant per action,
///   each carrying a [`Phase`](crate::Phase)).
/// - `Context`: dependencies the side-effect hook needs. Use `()` when there are none.
/// - `Error`: what the side-effect hook can fail with.
#[async_trait]
pub trait Slice: Clone + Send + Sync + 'static {
    /// The events this slice reduces.
    type Event: Send + Sync + Debug;

    /// The runtime context injected into [`Slice::on_event`].
    type Context: Send + Sync;

    /// The error type of the side-effect hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply one event to the state.
    fn reduce(&mut self, event: Self::Event);

    /// Called with the current state before `event` is reduced.
    ///
    /// Returning an error leaves the state untouched and reports the failure to the
    /// dispatcher. The default implementation does nothing.
    async fn on_event(&self, _event: &Self::Event, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Short, human-readable slice name used in log fields (e.g. `PetsState`).
pub(crate) fn slice_name<S>() -> &'static str {
    std::any::type_name::<S>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
