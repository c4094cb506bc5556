use crate::constants::TIME_FORMAT;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Name shown next to a message.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the chat log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: u64,
    text: String,
    sender: Sender,
    timestamp: DateTime<Local>,
}

impl Message {
    pub(crate) fn new(id: u64, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }

    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            sender: self.sender,
            text: self.text.clone(),
            time: self.formatted_time(),
        }
    }
}

/// Exported view of a message, as returned by the history API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sender: Sender,
    pub text: String,
    pub time: String,
}
