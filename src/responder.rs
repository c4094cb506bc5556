// src/responder.rs

use crate::constants::TIME_FORMAT;
use crate::errors::ChatResult;
use chrono::Local;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::time::Duration;

pub const GREETING_REPLY: &str = "Hello! Nice to meet you. How are you doing today?";
pub const HELP_REPLY: &str = "I'm here to help! You can ask me questions, have a conversation, or just say hello. What would you like to know?";
pub const WEATHER_REPLY: &str =
    "I don't have access to weather data, but I hope it's nice where you are! 🌤️";
pub const CLEAR_HINT_REPLY: &str =
    "You can clear the chat with Ctrl+L, or type /clear in console mode.";
pub const THANKS_REPLY: &str =
    "You're welcome! I'm happy I could help. Is there anything else you'd like to know?";
pub const FAREWELL_REPLY: &str =
    "Goodbye! It was nice chatting with you. Feel free to come back anytime! 👋";

pub const FALLBACK_REPLIES: [&str; 7] = [
    "That's interesting! Could you tell me more about that?",
    "I see what you mean. What made you think about that?",
    "That's a great point! How do you feel about it?",
    "Thanks for sharing that with me. What else is on your mind?",
    "I appreciate you telling me that. Is there anything specific you'd like to discuss?",
    "That sounds important to you. Would you like to elaborate?",
    "I'm listening! What would you like to talk about next?",
];

#[derive(Debug, Clone, Copy)]
enum Reply {
    Fixed(&'static str),
    CurrentTime,
}

/// Keyword rules, tested in order against the lowercased input. First match wins,
/// so `"hi"` shadows every later rule whose input also contains it.
const RULES: &[(&[&str], Reply)] = &[
    (&["hello", "hi"], Reply::Fixed(GREETING_REPLY)),
    (&["help"], Reply::Fixed(HELP_REPLY)),
    (&["time"], Reply::CurrentTime),
    (&["weather"], Reply::Fixed(WEATHER_REPLY)),
    (&["clear", "reset"], Reply::Fixed(CLEAR_HINT_REPLY)),
    (&["thank"], Reply::Fixed(THANKS_REPLY)),
    (&["bye", "goodbye"], Reply::Fixed(FAREWELL_REPLY)),
];

/// Produces the bot's answer to a user message.
pub trait Responder: Send {
    fn respond(&mut self, prompt: &str) -> ChatResult<String>;
}

/// The canned keyword matcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordResponder;

impl Responder for KeywordResponder {
    fn respond(&mut self, prompt: &str) -> ChatResult<String> {
        Ok(generate(prompt))
    }
}

pub fn generate(user_text: &str) -> String {
    generate_with(user_text, &mut rand::rng())
}

pub fn generate_with<R: Rng + ?Sized>(user_text: &str, rng: &mut R) -> String {
    let message = user_text.to_lowercase();

    let matched = RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply);

    match matched {
        Some(Reply::Fixed(text)) => text.to_string(),
        Some(Reply::CurrentTime) => {
            format!("The current time is {}.", Local::now().format(TIME_FORMAT))
        }
        None => FALLBACK_REPLIES
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_REPLIES[0])
            .to_string(),
    }
}

/// Uniform latency in `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub min: Duration,
    pub max: Duration,
}

impl ReplyDelay {
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        let ms = rng.random_range(self.min.as_millis() as u64..self.max.as_millis() as u64);
        Duration::from_millis(ms)
    }
}
