//! # Slice Actor
//!
//! The `SliceActor` owns one slice of application state. It is the "server" half of the
//! state container: it holds the receiver end of the request channel and the sender end
//! of a `watch` channel that publishes every new state to subscribers.
//!
//! **Concurrency Model**: each slice actor runs in its own Tokio task and handles requests
//! one at a time, so reducers never race and the state needs no `Mutex`. Several slices
//! run side by side; they never share state.

use crate::client::SliceClient;
use crate::error::FrameworkError;
use crate::message::SliceRequest;
use crate::slice::{slice_name, Slice};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The actor that owns and reduces a single slice.
///
/// # Usage Pattern
///
/// 1.  **Create**: `SliceActor::new(initial, buffer)` returns the actor and its client.
/// 2.  **Wire**: pass the slice's dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use slice_framework::{Slice, SliceActor};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { value: u32 }
///
/// #[derive(Debug)]
/// enum CounterEvent { Add(u32) }
///
/// impl Slice for Counter {
///     type Event = CounterEvent;
///     type Context = ();
///     type Error = std::convert::Infallible;
///
///     fn reduce(&mut self, event: CounterEvent) {
///         match event { CounterEvent::Add(n) => self.value += n }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SliceActor::new(Counter::default(), 8);
///     tokio::spawn(actor.run(()));
///
///     client.dispatch(CounterEvent::Add(2)).await.unwrap();
///     assert_eq!(client.current().value, 2);
/// }
/// ```
///
/// # Operations
///
/// * **Dispatch**:
///     1. Calls the `on_event` hook with the current state and the injected context.
///     2. On hook failure, answers with [`FrameworkError::EffectFailed`] and leaves the state as is.
///     3. Otherwise reduces the event, publishes the new state, then answers `Ok(())`.
///
/// * **Snapshot**: answers with a clone of the current state.
pub struct SliceActor<S: Slice> {
    receiver: mpsc::Receiver<SliceRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: Slice> SliceActor<S> {
    /// Creates a new `SliceActor` seeded with `initial`, and its client.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, callers wait.
    pub fn new(initial: S, buffer_size: usize) -> (Self, SliceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = SliceClient::new(sender, watcher);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: S::Context) {
        let slice = slice_name::<S>();
        info!(slice, "Slice started");

        let mut reduced: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SliceRequest::Dispatch { event, respond_to } => {
                    debug!(slice, ?event, "Dispatch");
                    if let Err(e) = self.state.on_event(&event, &context).await {
                        warn!(slice, error = %e, "on_event failed");
                        let _ = respond_to.send(Err(FrameworkError::EffectFailed(Box::new(e))));
                        continue;
                    }
                    self.state.reduce(event);
                    reduced += 1;
                    self.publisher.send_replace(self.state.clone());
                    let _ = respond_to.send(Ok(()));
                }
                SliceRequest::Snapshot { respond_to } => {
                    debug!(slice, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(slice, reduced, "Shutdown");
    }
}
