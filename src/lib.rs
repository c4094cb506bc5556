// src/lib.rs

pub mod app;
pub mod app_state;
pub mod config;
pub mod console;
pub mod constants;
pub mod errors;
pub mod input;
pub mod key_handlers;
pub mod logging;
pub mod message;
pub mod notification;
pub mod render;
pub mod responder;
pub mod session;
pub mod status_indicator;
pub mod store;
pub mod ui;

pub use errors::{ChatError, ChatResult, ValidationError};
pub use message::{HistoryEntry, Message, Sender};
pub use render::{ChatRenderer, SessionView};
pub use responder::{generate, KeywordResponder, Responder};
pub use session::{ChatSession, ConfirmPrompt};
pub use store::MessageStore;
