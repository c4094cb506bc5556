// src/session.rs

use crate::config::Config;
use crate::constants::{APOLOGY_MESSAGE, CLEAR_CONFIRM_QUESTION};
use crate::input::{DraftEdit, InputController, InputRules, LastSubmission};
use crate::message::{HistoryEntry, Message, Sender};
use crate::notification::{Notification, NotificationCenter, Severity};
use crate::render::SessionView;
use crate::responder::{KeywordResponder, ReplyDelay, Responder};
use crate::store::MessageStore;
use log::{debug, error, info};
use tokio::time::Instant;

/// Blocking yes/no gate in front of destructive actions.
pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// The one reply the bot is currently "typing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub prompt: String,
    pub due: Instant,
}

/// Owns the chat log and everything that feeds it. Both front ends drive a
/// session; neither touches the store directly.
pub struct ChatSession {
    store: MessageStore,
    responder: Box<dyn Responder>,
    input: InputController,
    rules: InputRules,
    delay: ReplyDelay,
    notifications: NotificationCenter,
    pending: Option<PendingReply>,
    last_submission: Option<LastSubmission>,
    connected: bool,
}

impl ChatSession {
    pub fn new(config: &Config) -> Self {
        Self::with_responder(config, Box::new(KeywordResponder))
    }

    pub fn with_responder(config: &Config, responder: Box<dyn Responder>) -> Self {
        Self {
            store: MessageStore::new(),
            responder,
            input: InputController::new(config.max_message_length),
            rules: InputRules {
                max_length: config.max_message_length,
                duplicate_window: config.duplicate_window(),
            },
            delay: ReplyDelay::from_millis(config.reply_delay_min_ms, config.reply_delay_max_ms),
            notifications: NotificationCenter::new(config.notification_ttl()),
            pending: None,
            last_submission: None,
            connected: true,
        }
    }

    pub fn submit(&mut self, raw: &str) -> bool {
        self.submit_at(raw, Instant::now())
    }

    /// Validates `raw`, appends it as a user message and schedules the reply.
    pub fn submit_at(&mut self, raw: &str, now: Instant) -> bool {
        let text = match self.rules.validate(raw, self.last_submission.as_ref(), now) {
            Ok(text) => text.to_string(),
            Err(e) => {
                debug!("submission rejected: {:?}", e);
                self.notifications.notify(e.to_string(), Severity::Warning, now);
                return false;
            }
        };

        if self.pending.is_some() {
            debug!("submission rejected: reply already in flight");
            return false;
        }

        let message = self.store.append(text.clone(), Sender::User);
        self.input.clear();
        self.last_submission = Some(LastSubmission {
            text: text.clone(),
            at: now,
        });

        let delay = self.delay.sample(&mut rand::rng());
        debug!("reply to #{} due in {}ms", message.id(), delay.as_millis());
        self.pending = Some(PendingReply {
            prompt: text,
            due: now + delay,
        });
        true
    }

    /// Submits whatever is in the input box. The draft survives a rejection.
    pub fn submit_draft(&mut self) -> bool {
        let draft = self.input.text().to_string();
        self.submit(&draft)
    }

    /// Programmatic entry point, same rules as typing the text.
    pub fn send_message(&mut self, text: &str) -> bool {
        self.submit(text)
    }

    pub fn type_char(&mut self, c: char) {
        if self.input.insert(c) != DraftEdit::Inserted {
            self.notify("Character limit reached", Severity::Warning);
        }
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    pub fn pending(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    pub fn reply_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Appends the bot message if the pending reply is due at `now`.
    pub fn complete_due_reply(&mut self, now: Instant) -> Option<Message> {
        match &self.pending {
            Some(pending) if pending.due <= now => {}
            _ => return None,
        }
        let pending = self.pending.take()?;
        Some(self.finish_reply(&pending.prompt, now))
    }

    /// Waits out the simulated latency and appends the bot message.
    /// Returns `None` when nothing is in flight.
    pub async fn respond(&mut self) -> Option<Message> {
        let due = self.reply_deadline()?;
        tokio::time::sleep_until(due).await;
        self.complete_due_reply(Instant::now())
    }

    fn finish_reply(&mut self, prompt: &str, now: Instant) -> Message {
        match self.responder.respond(prompt) {
            Ok(text) => self.store.append(text, Sender::Bot),
            Err(e) => {
                error!("responder failed: {}", e);
                let message = self.store.append(APOLOGY_MESSAGE, Sender::Bot);
                self.notifications
                    .notify("Error generating response", Severity::Warning, now);
                message
            }
        }
    }

    /// Resets the log to the seed message if the prompt agrees.
    /// A reply already in flight is still delivered afterwards.
    pub fn clear_chat(&mut self, prompt: &mut dyn ConfirmPrompt) -> bool {
        if !prompt.confirm(CLEAR_CONFIRM_QUESTION) {
            debug!("clear declined");
            return false;
        }

        self.store.clear();
        self.last_submission = None;
        info!("chat cleared");
        self.notify("Chat cleared", Severity::Success);
        true
    }

    pub fn messages(&self) -> &[Message] {
        self.store.list()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.store.history()
    }

    pub fn set_connected(&mut self, connected: bool) {
        if self.connected != connected {
            info!(
                "connection status: {}",
                if connected { "online" } else { "offline" }
            );
        }
        self.connected = connected;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.notifications.notify(message, severity, Instant::now())
    }

    pub fn active_notification(&self, now: Instant) -> Option<&Notification> {
        self.notifications.active(now)
    }

    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.prune(now);
    }

    /// Earliest instant at which the visible state changes on its own.
    pub fn next_wakeup(&self) -> Option<Instant> {
        match (self.reply_deadline(), self.notifications.expires_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn view(&self, now: Instant) -> SessionView<'_> {
        SessionView {
            messages: self.store.list(),
            typing: self.is_typing(),
            connected: self.connected,
            notification: self.notifications.active(now),
            draft: self.input.text(),
            counter: self.input.counter(),
            can_send: self.input.can_send(self.is_typing()),
        }
    }
}
