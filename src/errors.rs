// src/errors.rs

use thiserror::Error;

/// Reasons a submission is turned away before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a message")]
    Empty,
    #[error("Message is too long")]
    TooLong { length: usize, max: usize },
    #[error("Please wait before sending another message")]
    Duplicate,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("responder error: {0}")]
    Responder(String),

    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }

    pub fn responder_error(msg: impl Into<String>) -> Self {
        ChatError::Responder(msg.into())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
