use async_trait::async_trait;
use slice_framework::{FrameworkError, Phase, Slice, SliceActor};
use std::sync::{Arc, Mutex};

// --- Test Slice ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Inbox {
    messages: Vec<String>,
    loading: bool,
    error: Option<String>,
}

#[derive(Debug)]
enum InboxEvent {
    Receive(Phase<String>),
    Clear,
}

#[derive(Debug, thiserror::Error)]
#[error("journal unavailable")]
struct JournalError;

/// Side-effect target: every cleared inbox is journaled, unless the journal is offline.
#[derive(Default)]
struct Journal {
    offline: Mutex<bool>,
    entries: Mutex<Vec<usize>>,
}

#[async_trait]
impl Slice for Inbox {
    type Event = InboxEvent;
    type Context = Arc<Journal>;
    type Error = JournalError;

    fn reduce(&mut self, event: InboxEvent) {
        match event {
            InboxEvent::Receive(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            InboxEvent::Receive(Phase::Fulfilled(message)) => {
                self.loading = false;
                self.messages.push(message);
            }
            InboxEvent::Receive(Phase::Rejected(error)) => {
                self.loading = false;
                self.error = Some(error);
            }
            InboxEvent::Clear => self.messages.clear(),
        }
    }

    async fn on_event(&self, event: &InboxEvent, journal: &Arc<Journal>) -> Result<(), JournalError> {
        if let InboxEvent::Clear = event {
            if *journal.offline.lock().unwrap() {
                return Err(JournalError);
            }
            journal.entries.lock().unwrap().push(self.messages.len());
        }
        Ok(())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_dispatch_reduces_and_publishes() {
    let (actor, client) = SliceActor::new(Inbox::default(), 10);
    tokio::spawn(actor.run(Arc::new(Journal::default())));

    let mut updates = client.subscribe();

    client
        .dispatch(InboxEvent::Receive(Phase::Pending))
        .await
        .unwrap();
    assert!(updates.has_changed().unwrap());
    assert!(updates.borrow_and_update().loading);

    client
        .dispatch(InboxEvent::Receive(Phase::Fulfilled("hello".into())))
        .await
        .unwrap();

    let state = client.snapshot().await.unwrap();
    assert!(!state.loading);
    assert_eq!(state.messages, vec!["hello".to_string()]);
    assert_eq!(client.current(), state);
}

#[tokio::test]
async fn test_rejected_phase_sets_error() {
    let (actor, client) = SliceActor::new(Inbox::default(), 10);
    tokio::spawn(actor.run(Arc::new(Journal::default())));

    client
        .dispatch(InboxEvent::Receive(Phase::Pending))
        .await
        .unwrap();
    client
        .dispatch(InboxEvent::Receive(Phase::Rejected("network error".into())))
        .await
        .unwrap();

    let state = client.current();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("network error"));
}

#[tokio::test]
async fn test_side_effect_runs_before_reduce() {
    let journal = Arc::new(Journal::default());
    let (actor, client) = SliceActor::new(Inbox::default(), 10);
    tokio::spawn(actor.run(journal.clone()));

    for text in ["a", "b"] {
        client
            .dispatch(InboxEvent::Receive(Phase::Fulfilled(text.into())))
            .await
            .unwrap();
    }
    client.dispatch(InboxEvent::Clear).await.unwrap();

    // The hook saw the state before the clear was applied.
    assert_eq!(*journal.entries.lock().unwrap(), vec![2]);
    assert!(client.current().messages.is_empty());
}

#[tokio::test]
async fn test_failed_side_effect_leaves_state_untouched() {
    let journal = Arc::new(Journal::default());
    *journal.offline.lock().unwrap() = true;

    let (actor, client) = SliceActor::new(Inbox::default(), 10);
    tokio::spawn(actor.run(journal));

    client
        .dispatch(InboxEvent::Receive(Phase::Fulfilled("keep me".into())))
        .await
        .unwrap();

    let result = client.dispatch(InboxEvent::Clear).await;
    match result {
        Err(FrameworkError::EffectFailed(e)) => assert_eq!(e.to_string(), "journal unavailable"),
        other => panic!("Expected EffectFailed, got {:?}", other),
    }

    assert_eq!(client.current().messages, vec!["keep me".to_string()]);
}

#[tokio::test]
async fn test_events_from_concurrent_dispatchers_are_all_applied() {
    let (actor, client) = SliceActor::new(Inbox::default(), 4);
    tokio::spawn(actor.run(Arc::new(Journal::default())));

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .dispatch(InboxEvent::Receive(Phase::Fulfilled(format!("m{}", i))))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(client.snapshot().await.unwrap().messages.len(), 20);
}

#[tokio::test]
async fn test_actor_stops_when_clients_are_dropped() {
    let (actor, client) = SliceActor::new(Inbox::default(), 10);
    let handle = tokio::spawn(actor.run(Arc::new(Journal::default())));

    drop(client);
    tokio::time::timeout(std::time::Duration::from_secs(1), handle)
        .await
        .expect("actor should stop once every client is gone")
        .unwrap();
}
