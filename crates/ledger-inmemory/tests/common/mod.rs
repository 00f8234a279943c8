//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ledger_core::{Chat, LedgerObserver, Message, User};
use ledger_inmemory::InMemoryChatStore;

/// Event recorded by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedEvent {
    LastMessageDeleted(u64),
    MessageDeleted(u64),
    UnreadListing { user_id: i64, texts: Vec<String> },
}

/// Observer that keeps every status event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: ObservedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl LedgerObserver for RecordingObserver {
    fn on_last_message_deleted(&self, chat: &Chat) {
        self.push(ObservedEvent::LastMessageDeleted(chat.id));
    }

    fn on_message_deleted(&self, message: &Message) {
        self.push(ObservedEvent::MessageDeleted(message.id));
    }

    fn on_unread_listing(&self, user_id: i64, unread: &[Message]) {
        self.push(ObservedEvent::UnreadListing {
            user_id,
            texts: unread.iter().map(|m| m.text.clone()).collect(),
        });
    }
}

pub fn recording_store() -> (InMemoryChatStore, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let store = InMemoryChatStore::with_observer(observer.clone());
    (store, observer)
}

pub fn alice() -> User {
    User::with_username(1, "alice")
}

pub fn bob() -> User {
    User::with_username(2, "bob")
}

pub fn carol() -> User {
    User::with_username(3, "carol")
}
