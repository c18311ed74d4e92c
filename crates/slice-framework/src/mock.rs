//! # Mock Slices & Testing Guide
//!
//! Feature clients dispatch events and read state from other slices. To test that logic
//! without running real reducers, swap the real slice for a [`MockSlice`]: it answers
//! every dispatch, records the events it saw, serves a state the test controls, and can be
//! told to fail the next dispatches.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockSlice | Real SliceActor |
//! |---------|-----------|-----------------|
//! | **State** | Fixed, set by the test (`publish`) | Real reducer output |
//! | **Assertions** | Exact event sequence (`dispatched`) | Resulting state |
//! | **Error Injection** | Easy (`fail_next_dispatch`) | Needs a failing side effect |
//!
//! ```rust
//! use slice_framework::mock::MockSlice;
//! use slice_framework::Slice;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter { value: u32 }
//! #[derive(Clone, Debug, PartialEq)]
//! enum CounterEvent { Add(u32) }
//!
//! impl Slice for Counter {
//!     type Event = CounterEvent;
//!     type Context = ();
//!     type Error = std::convert::Infallible;
//!     fn reduce(&mut self, event: CounterEvent) {
//!         match event { CounterEvent::Add(n) => self.value += n }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockSlice::new(Counter::default());
//!     let client = mock.client();
//!
//!     client.dispatch(CounterEvent::Add(1)).await.unwrap();
//!
//!     // The mock records, it does not reduce.
//!     assert_eq!(client.current().value, 0);
//!     assert_eq!(mock.dispatched(), vec![CounterEvent::Add(1)]);
//! }
//! ```

use crate::{FrameworkError, Slice, SliceClient, SliceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, oneshot, watch};

/// A stand-in slice that records dispatched events instead of reducing them.
pub struct MockSlice<S: Slice> {
    client: SliceClient<S>,
    publisher: watch::Sender<S>,
    events: Arc<Mutex<Vec<S::Event>>>,
    failures: Arc<Mutex<VecDeque<FrameworkError>>>,
    _handle: tokio::task::JoinHandle<()>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<S: Slice> MockSlice<S> {
    /// Creates a mock serving `initial` as its state.
    pub fn new(initial: S) -> Self {
        let (sender, mut receiver) = mpsc::channel::<SliceRequest<S>>(100);
        let (publisher, watcher) = watch::channel(initial);
        let events = Arc::new(Mutex::new(Vec::new()));
        let failures = Arc::new(Mutex::new(VecDeque::new()));

        let events_clone = events.clone();
        let failures_clone = failures.clone();
        let state = watcher.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                match request {
                    SliceRequest::Dispatch { event, respond_to } => {
                        lock(&events_clone).push(event);
                        let response = match lock(&failures_clone).pop_front() {
                            Some(error) => Err(error),
                            None => Ok(()),
                        };
                        let _ = respond_to.send(response);
                    }
                    SliceRequest::Snapshot { respond_to } => {
                        let _ = respond_to.send(Ok(state.borrow().clone()));
                    }
                }
            }
        });

        Self {
            client: SliceClient::new(sender, watcher),
            publisher,
            events,
            failures,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> SliceClient<S> {
        self.client.clone()
    }

    /// Replaces the state every client of this mock observes.
    pub fn publish(&self, state: S) {
        self.publisher.send_replace(state);
    }

    /// Makes the next dispatch answer with `error`. Calls queue up.
    pub fn fail_next_dispatch(&self, error: FrameworkError) {
        lock(&self.failures).push_back(error);
    }

    /// Number of events dispatched so far.
    pub fn dispatch_count(&self) -> usize {
        lock(&self.events).len()
    }
}

impl<S: Slice> MockSlice<S>
where
    S::Event: Clone,
{
    /// Every event dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<S::Event> {
        lock(&self.events).clone()
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver its requests arrive on.
///
/// Use this when a test needs to hold a request and answer it manually, e.g. to observe
/// a feature client while its dispatch is still in flight.
pub fn create_mock_client<S: Slice>(
    initial: S,
    buffer_size: usize,
) -> (SliceClient<S>, mpsc::Receiver<SliceRequest<S>>, watch::Sender<S>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (publisher, watcher) = watch::channel(initial);
    (SliceClient::new(sender, watcher), receiver, publisher)
}

/// Waits for the next request and returns it if it is a dispatch.
pub async fn expect_dispatch<S: Slice>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<(S::Event, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(SliceRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns its responder if it is a snapshot.
pub async fn expect_snapshot<S: Slice>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<oneshot::Sender<Result<S, FrameworkError>>> {
    match receiver.recv().await {
        Some(SliceRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Toggle {
        on: bool,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum ToggleEvent {
        Flip,
    }

    impl Slice for Toggle {
        type Event = ToggleEvent;
        type Context = ();
        type Error = std::convert::Infallible;

        fn reduce(&mut self, _event: ToggleEvent) {
            self.on = !self.on;
        }
    }

    #[tokio::test]
    async fn test_mock_records_and_fails_on_demand() {
        let mock = MockSlice::new(Toggle::default());
        let client = mock.client();

        mock.fail_next_dispatch(FrameworkError::SliceClosed);
        let first = client.dispatch(ToggleEvent::Flip).await;
        assert!(matches!(first, Err(FrameworkError::SliceClosed)));

        client.dispatch(ToggleEvent::Flip).await.unwrap();
        assert_eq!(mock.dispatched(), vec![ToggleEvent::Flip, ToggleEvent::Flip]);
        assert_eq!(mock.dispatch_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_publish_is_visible_to_snapshot_and_current() {
        let mock = MockSlice::new(Toggle::default());
        let client = mock.client();

        mock.publish(Toggle { on: true });
        assert!(client.current().on);
        assert!(client.snapshot().await.unwrap().on);
    }

    #[tokio::test]
    async fn test_channel_helpers() {
        let (client, mut receiver, _publisher) = create_mock_client(Toggle::default(), 4);

        let task = tokio::spawn(async move { client.dispatch(ToggleEvent::Flip).await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(event, ToggleEvent::Flip);
        responder.send(Ok(())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }
}
