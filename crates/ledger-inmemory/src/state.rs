//! Synchronous ledger state guarded by the store's lock.
//!
//! Every public store operation maps onto exactly one method here, called with the lock held.

use ledger_core::{Chat, LedgerError, LedgerObserver, Message, Result, User};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Point-in-time copy of the ledger contents, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub chats: Vec<Chat>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    chats: Vec<Chat>,
    messages: Vec<Message>,
    next_chat_id: u64,
    next_message_id: u64,
}

impl LedgerState {
    pub(crate) fn send_message(&mut self, sender: &User, receiver: &User, text: &str) -> bool {
        let existing = self.find_chat(sender, receiver).map(|chat| chat.id);
        let chat_id = match existing {
            Some(id) => id,
            None => self.create_chat(sender, receiver).id,
        };

        let message_id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(Message::new(
            message_id,
            chat_id,
            sender.id,
            receiver.id,
            text.to_string(),
        ));
        debug!(message_id, chat_id, sender_id = sender.id, receiver_id = receiver.id, "Message appended");

        // Replying means the inbound messages were read.
        self.mark_messages_as_read(chat_id, sender.id);
        true
    }

    fn find_chat(&self, user_a: &User, user_b: &User) -> Option<&Chat> {
        let pair = user_a.vs(user_b);
        self.chats.iter().find(|chat| chat.members == pair)
    }

    pub(crate) fn get_chat_list(&self, user_a: &User, user_b: &User) -> Vec<Chat> {
        let pair = user_a.vs(user_b);
        self.chats
            .iter()
            .filter(|chat| chat.members == pair)
            .cloned()
            .collect()
    }

    pub(crate) fn get_all_chats_for_user(&self, user: &User) -> Vec<Chat> {
        self.chats
            .iter()
            .filter(|chat| chat.members.contains(user))
            .cloned()
            .collect()
    }

    pub(crate) fn create_chat(&mut self, sender: &User, receiver: &User) -> Chat {
        let chat = Chat {
            id: self.next_chat_id,
            members: sender.vs(receiver),
        };
        self.next_chat_id += 1;
        self.chats.push(chat.clone());
        debug!(chat_id = chat.id, user1 = sender.id, user2 = receiver.id, "Chat created");
        chat
    }

    pub(crate) fn mark_messages_as_read(&mut self, chat_id: u64, receiver_id: i64) {
        self.messages
            .iter_mut()
            .filter(|m| m.chat_id == chat_id && m.is_unread_for(receiver_id))
            .for_each(|m| m.read = true);
    }

    pub(crate) fn delete_chat(&mut self, chat_id: u64) -> Result<bool> {
        if !self.chats.iter().any(|chat| chat.id == chat_id) {
            return Err(LedgerError::ChatNotFound(chat_id));
        }
        self.chats.retain(|chat| chat.id != chat_id);
        self.messages.retain(|m| m.chat_id != chat_id);
        debug!(chat_id, "Chat deleted with its messages");
        Ok(true)
    }

    pub(crate) fn edit_message(&mut self, message_id: u64, new_text: &str) -> Result<Message> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(LedgerError::MessageNotFound(message_id))?;
        message.text = new_text.to_string();
        Ok(message.clone())
    }

    pub(crate) fn delete_message(
        &mut self,
        message_id: u64,
        observer: &dyn LedgerObserver,
    ) -> Result<bool> {
        let position = self
            .messages
            .iter()
            .position(|m| m.id == message_id)
            .ok_or(LedgerError::MessageNotFound(message_id))?;
        let chat_id = self.messages[position].chat_id;

        let in_chat = self.messages.iter().filter(|m| m.chat_id == chat_id).count();
        if in_chat == 1 {
            if let Some(chat) = self.chats.iter().find(|chat| chat.id == chat_id) {
                observer.on_last_message_deleted(chat);
            }
            return self.delete_chat(chat_id);
        }

        let removed = self.messages.remove(position);
        observer.on_message_deleted(&removed);
        Ok(true)
    }

    pub(crate) fn get_all_messages_from_chat(&self, chat_id: u64) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect()
    }

    pub(crate) fn get_messages_from_chat(
        &self,
        chat_id: u64,
        last_message_id: u64,
        count: usize,
    ) -> Result<Vec<Message>> {
        if !self.chats.iter().any(|chat| chat.id == chat_id) {
            return Err(LedgerError::ChatNotFound(chat_id));
        }
        Ok(self
            .messages
            .iter()
            .filter(|m| m.chat_id == chat_id && m.id >= last_message_id)
            .take(count)
            .cloned()
            .collect())
    }

    pub(crate) fn get_unread_chats_count(
        &self,
        user_id: i64,
        observer: &dyn LedgerObserver,
    ) -> usize {
        let unread: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.is_unread_for(user_id))
            .cloned()
            .collect();

        let mut chat_ids: Vec<u64> = Vec::new();
        for message in &unread {
            if !chat_ids.contains(&message.chat_id) {
                chat_ids.push(message.chat_id);
            }
        }

        observer.on_unread_listing(user_id, &unread);
        chat_ids.len()
    }

    pub(crate) fn clear_all_data(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            chats: self.chats.clone(),
            messages: self.messages.clone(),
        }
    }

    pub(crate) fn len_chats(&self) -> usize {
        self.chats.len()
    }

    pub(crate) fn len_messages(&self) -> usize {
        self.messages.len()
    }
}
