//! # Chat Storage
//!
//! This module defines the ledger interface for chats and the messages exchanged in them.
//!
//! The `ChatStore` trait is implemented by storage backends (currently only in-memory).
//! Every method is one atomic step against the store: lookups, id assignment and
//! cascades never interleave with another caller's operation.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Chat, Message, User};

/// Trait for sending, editing, deleting and listing chat messages.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Appends a message from `sender` to `receiver`, creating their chat on first contact.
    /// Unread messages addressed to `sender` in that chat are marked read.
    async fn send_message(&self, sender: &User, receiver: &User, text: &str) -> bool;

    /// Returns chats whose members are `{user_a, user_b}` in either order.
    async fn get_chat_list(&self, user_a: &User, user_b: &User) -> Vec<Chat>;

    /// Returns every chat `user` is a member of, in creation order.
    async fn get_all_chats_for_user(&self, user: &User) -> Vec<Chat>;

    /// Creates a chat for the pair without checking for an existing one.
    async fn create_chat(&self, sender: &User, receiver: &User) -> Chat;

    /// Marks unread messages in `chat_id` addressed to `receiver_id` as read. Unknown chats are a no-op.
    async fn mark_messages_as_read(&self, chat_id: u64, receiver_id: i64);

    /// Removes the chat and all of its messages.
    async fn delete_chat(&self, chat_id: u64) -> Result<bool>;

    /// Replaces a message's text in place and returns the updated message.
    async fn edit_message(&self, message_id: u64, new_text: &str) -> Result<Message>;

    /// Removes a message. Removing the last message of a chat removes the chat as well.
    async fn delete_message(&self, message_id: u64) -> Result<bool>;

    /// Returns the chat's messages in insertion order; empty for unknown chats.
    async fn get_all_messages_from_chat(&self, chat_id: u64) -> Vec<Message>;

    /// Returns up to `count` messages of `chat_id` with `id >= last_message_id`.
    async fn get_messages_from_chat(
        &self,
        chat_id: u64,
        last_message_id: u64,
        count: usize,
    ) -> Result<Vec<Message>>;

    /// Counts distinct chats holding at least one unread message addressed to `user_id`.
    async fn get_unread_chats_count(&self, user_id: i64) -> usize;

    /// Drops all chats and messages and restarts id assignment at 0.
    async fn clear_all_data(&self);
}
