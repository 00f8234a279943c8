//! # ledger-core
//!
//! Core types and traits for the chat/message ledger: [`User`], [`ChatPair`], [`Chat`], [`Message`],
//! the [`ChatStore`] trait, the [`LedgerObserver`] status capability, configuration and
//! tracing initialization. Storage-agnostic; implemented by `ledger-inmemory`.
//!
//! ## Modules
//!
//! - [`types`] - User, ChatPair, Chat, Message
//! - [`store`] - ChatStore trait
//! - [`observer`] - LedgerObserver, TracingObserver, SilentObserver
//! - [`error`] - LedgerError
//! - [`config`] - LedgerConfig
//! - [`logger`] - init_tracing

pub mod config;
pub mod error;
pub mod logger;
pub mod observer;
pub mod store;
pub mod types;

pub use config::LedgerConfig;
pub use error::{LedgerError, Result};
pub use logger::init_tracing;
pub use observer::{LedgerObserver, SilentObserver, TracingObserver};
pub use store::ChatStore;
pub use types::{Chat, ChatPair, Message, User};
