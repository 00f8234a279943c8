//! # In-Memory Chat Ledger
//!
//! This crate provides an in-memory implementation of the `ChatStore` trait from `ledger-core`.
//!
//! ## InMemoryChatStore
//!
//! Holds chats and messages in insertion order. Chat and message ids come from running
//! counters, so ids are never reused until [`ChatStore::clear_all_data`] resets the store.
//!
//! **Limitations**:
//! - Data is lost on restart
//! - Limited by available memory
//!
//! ## Example
//!
//! ```rust
//! use ledger_core::{ChatStore, User};
//! use ledger_inmemory::InMemoryChatStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = InMemoryChatStore::new();
//!     let alice = User::new(1);
//!     let bob = User::new(2);
//!
//!     store.send_message(&alice, &bob, "hi").await;
//!     assert_eq!(store.get_chat_list(&bob, &alice).await.len(), 1);
//! }
//! ```
//!
//! ## Thread Safety
//!
//! The store uses `Arc<RwLock<>>`; each operation holds the lock for its whole duration,
//! so find-or-create, id assignment and delete cascades are atomic.

mod state;
mod store;

#[cfg(test)]
mod state_test;

pub use state::LedgerSnapshot;
pub use store::InMemoryChatStore;
