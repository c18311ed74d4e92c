//! # SliceHandle Trait
//!
//! Provides a common interface for feature-specific clients, adding default state reads and
//! dispatch on top of a generic [`SliceClient`].
use crate::{FrameworkError, Slice, SliceClient};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for feature-specific clients to inherit the standard slice operations.
///
/// A feature client wraps a `SliceClient<S>` together with whatever the feature's actions
/// need (remote services, other slices). Implementing `inner` and `map_error` is enough to
/// get `state`, `subscribe`, `snapshot` and `dispatch`.
///
/// ```rust
/// use slice_framework::{FrameworkError, Slice, SliceActor, SliceClient, SliceHandle};
///
/// #[derive(Clone, Debug, Default)]
/// struct Flags { dark_mode: bool }
///
/// #[derive(Debug)]
/// enum FlagEvent { Toggle }
///
/// impl Slice for Flags {
///     type Event = FlagEvent;
///     type Context = ();
///     type Error = std::convert::Infallible;
///     fn reduce(&mut self, _: FlagEvent) { self.dark_mode = !self.dark_mode; }
/// }
///
/// struct FlagsClient { inner: SliceClient<Flags> }
///
/// impl SliceHandle<Flags> for FlagsClient {
///     type Error = String;
///     fn inner(&self) -> &SliceClient<Flags> { &self.inner }
///     fn map_error(e: FrameworkError) -> String { e.to_string() }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = SliceActor::new(Flags::default(), 4);
///     tokio::spawn(actor.run(()));
///     let flags = FlagsClient { inner };
///
///     flags.dispatch(FlagEvent::Toggle).await.unwrap();
///     assert!(flags.state().dark_mode);
/// }
/// ```
#[async_trait]
pub trait SliceHandle<S: Slice>: Send + Sync {
    /// The feature-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic SliceClient.
    fn inner(&self) -> &SliceClient<S>;

    /// Map framework errors to the feature error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The most recently published state.
    fn state(&self) -> S {
        self.inner().current()
    }

    /// Subscribe to state changes.
    fn subscribe(&self) -> watch::Receiver<S> {
        self.inner().subscribe()
    }

    /// Read the state after every queued event has been reduced.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Dispatch an event to the slice.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, event: S::Event) -> Result<(), Self::Error> {
        tracing::debug!("Sending event");
        self.inner().dispatch(event).await.map_err(Self::map_error)
    }
}
