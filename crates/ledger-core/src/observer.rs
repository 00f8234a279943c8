//! Status output of the ledger.
//!
//! The store never prints; it reports through a [`LedgerObserver`] handed to it at construction.

use tracing::info;

use crate::types::{Chat, Message};

pub trait LedgerObserver: Send + Sync {
    /// The deleted message was the last one in `chat`, so the chat is being deleted too.
    fn on_last_message_deleted(&self, chat: &Chat);

    fn on_message_deleted(&self, message: &Message);

    /// Every unread message addressed to `user_id`, in insertion order.
    fn on_unread_listing(&self, user_id: i64, unread: &[Message]);
}

/// Writes status lines as `info` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LedgerObserver for TracingObserver {
    fn on_last_message_deleted(&self, chat: &Chat) {
        info!(chat_id = chat.id, "Only message in {}; deleting chat", chat);
    }

    fn on_message_deleted(&self, message: &Message) {
        info!(
            message_id = message.id,
            chat_id = message.chat_id,
            "Message deleted"
        );
    }

    fn on_unread_listing(&self, user_id: i64, unread: &[Message]) {
        let listing: String = unread.iter().map(|m| format!("\n- {}", m)).collect();
        info!(
            user_id,
            count = unread.len(),
            "Unread messages in chats:{}",
            listing
        );
    }
}

/// Discards all status output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl LedgerObserver for SilentObserver {
    fn on_last_message_deleted(&self, _chat: &Chat) {}

    fn on_message_deleted(&self, _message: &Message) {}

    fn on_unread_listing(&self, _user_id: i64, _unread: &[Message]) {}
}
