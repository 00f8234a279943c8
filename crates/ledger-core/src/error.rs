use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Chat not found: {0}")]
    ChatNotFound(u64),

    #[error("Message not found: {0}")]
    MessageNotFound(u64),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
