use std::sync::Arc;

use async_trait::async_trait;
use ledger_core::{
    Chat, ChatStore, LedgerConfig, LedgerObserver, Message, Result, SilentObserver,
    TracingObserver, User,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::state::{LedgerSnapshot, LedgerState};

/// In-memory chat ledger.
///
/// Clones share the same underlying state.
#[derive(Clone)]
pub struct InMemoryChatStore {
    state: Arc<RwLock<LedgerState>>,
    observer: Arc<dyn LedgerObserver>,
}

impl InMemoryChatStore {
    /// Creates an empty store reporting through [`TracingObserver`].
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn LedgerObserver>) -> Self {
        Self {
            state: Arc::new(RwLock::new(LedgerState::default())),
            observer,
        }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        if config.status_output {
            Self::new()
        } else {
            Self::with_observer(Arc::new(SilentObserver))
        }
    }

    pub async fn snapshot(&self) -> LedgerSnapshot {
        self.state.read().await.snapshot()
    }

    pub async fn len_chats(&self) -> usize {
        self.state.read().await.len_chats()
    }

    pub async fn len_messages(&self) -> usize {
        self.state.read().await.len_messages()
    }
}

impl Default for InMemoryChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryChatStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryChatStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn send_message(&self, sender: &User, receiver: &User, text: &str) -> bool {
        info!(
            sender_id = sender.id,
            receiver_id = receiver.id,
            "Sending message"
        );
        self.state.write().await.send_message(sender, receiver, text)
    }

    async fn get_chat_list(&self, user_a: &User, user_b: &User) -> Vec<Chat> {
        self.state.read().await.get_chat_list(user_a, user_b)
    }

    async fn get_all_chats_for_user(&self, user: &User) -> Vec<Chat> {
        self.state.read().await.get_all_chats_for_user(user)
    }

    async fn create_chat(&self, sender: &User, receiver: &User) -> Chat {
        self.state.write().await.create_chat(sender, receiver)
    }

    async fn mark_messages_as_read(&self, chat_id: u64, receiver_id: i64) {
        self.state
            .write()
            .await
            .mark_messages_as_read(chat_id, receiver_id)
    }

    async fn delete_chat(&self, chat_id: u64) -> Result<bool> {
        info!(chat_id, "Deleting chat");
        self.state.write().await.delete_chat(chat_id)
    }

    async fn edit_message(&self, message_id: u64, new_text: &str) -> Result<Message> {
        info!(message_id, "Editing message");
        self.state.write().await.edit_message(message_id, new_text)
    }

    async fn delete_message(&self, message_id: u64) -> Result<bool> {
        info!(message_id, "Deleting message");
        self.state
            .write()
            .await
            .delete_message(message_id, self.observer.as_ref())
    }

    async fn get_all_messages_from_chat(&self, chat_id: u64) -> Vec<Message> {
        self.state.read().await.get_all_messages_from_chat(chat_id)
    }

    async fn get_messages_from_chat(
        &self,
        chat_id: u64,
        last_message_id: u64,
        count: usize,
    ) -> Result<Vec<Message>> {
        self.state
            .read()
            .await
            .get_messages_from_chat(chat_id, last_message_id, count)
    }

    async fn get_unread_chats_count(&self, user_id: i64) -> usize {
        self.state
            .read()
            .await
            .get_unread_chats_count(user_id, self.observer.as_ref())
    }

    async fn clear_all_data(&self) {
        info!("Clearing all chats and messages");
        self.state.write().await.clear_all_data();
    }
}
