use crate::constants::{SEED_MESSAGE, SEED_MESSAGE_ID};
use crate::message::{HistoryEntry, Message, Sender};
use log::debug;

/// Ordered, append-only chat log. Always holds the seed message first.
#[derive(Debug, Clone)]
pub struct MessageStore {
    seed: Message,
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        let seed = Message::new(SEED_MESSAGE_ID, SEED_MESSAGE, Sender::Bot);
        Self {
            messages: vec![seed.clone()],
            seed,
            next_id: SEED_MESSAGE_ID + 1,
        }
    }

    /// Appends a message. Callers validate the text first.
    pub fn append(&mut self, text: impl Into<String>, sender: Sender) -> Message {
        let message = Message::new(self.next_id, text, sender);
        self.next_id += 1;
        debug!("store: appended #{} from {}", message.id(), sender);
        self.messages.push(message.clone());
        message
    }

    /// Drops everything but the seed and restarts id allocation after it.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.messages.push(self.seed.clone());
        self.next_id = SEED_MESSAGE_ID + 1;
    }

    pub fn list(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.messages.iter().map(Message::to_history_entry).collect()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
