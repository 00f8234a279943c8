//! Core types: user, chat pair, chat and message.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// User identity. Only `id` takes part in equality; `username` is display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self { id, username: None }
    }

    pub fn with_username(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: Some(username.into()),
        }
    }

    /// Pairs this user with `other` as the two members of a chat.
    pub fn vs(&self, other: &User) -> ChatPair {
        ChatPair::new(self.clone(), other.clone())
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.username {
            Some(name) => write!(f, "{} ({})", name, self.id),
            None => write!(f, "user {}", self.id),
        }
    }
}

/// Unordered pair of chat members: `(a, b) == (b, a)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatPair {
    pub user1: User,
    pub user2: User,
}

impl ChatPair {
    pub fn new(user1: User, user2: User) -> Self {
        Self { user1, user2 }
    }

    pub fn contains(&self, user: &User) -> bool {
        self.user1 == *user || self.user2 == *user
    }

    /// Returns the member that is not `user`, or `None` if `user` is not a member.
    /// For a self-chat both members are `user`, so `user` itself is returned.
    pub fn other(&self, user: &User) -> Option<&User> {
        if self.user1 == *user {
            Some(&self.user2)
        } else if self.user2 == *user {
            Some(&self.user1)
        } else {
            None
        }
    }

    fn ordered_ids(&self) -> (i64, i64) {
        let (a, b) = (self.user1.id, self.user2.id);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

impl PartialEq for ChatPair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered_ids() == other.ordered_ids()
    }
}

impl Eq for ChatPair {}

impl Hash for ChatPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered_ids().hash(state);
    }
}

/// A conversation between exactly two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: u64,
    pub members: ChatPair,
}

impl fmt::Display for Chat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chat #{} ({} ↔ {})",
            self.id, self.members.user1, self.members.user2
        )
    }
}

/// A single text message inside a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub chat_id: u64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    /// Flips to `true` once the receiver has read it; never back.
    pub read: bool,
}

impl Message {
    pub fn new(id: u64, chat_id: u64, sender_id: i64, receiver_id: i64, text: String) -> Self {
        Self {
            id,
            chat_id,
            sender_id,
            receiver_id,
            text,
            read: false,
        }
    }

    pub fn is_unread_for(&self, user_id: i64) -> bool {
        self.receiver_id == user_id && !self.read
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.read { "read" } else { "unread" };
        write!(f, "{} [{}] (chat_id: {})", self.text, status, self.chat_id)
    }
}
