// Message limits
pub const MAX_MESSAGE_LENGTH: usize = 1000;
pub const DUPLICATE_WINDOW_MS: u64 = 2000;

// Simulated reply latency, half-open range
pub const REPLY_DELAY_MIN_MS: u64 = 1000;
pub const REPLY_DELAY_MAX_MS: u64 = 3000;

pub const NOTIFICATION_TTL_MS: u64 = 3000;

// Seed message always present at the top of the log
pub const SEED_MESSAGE_ID: u64 = 1;
pub const SEED_MESSAGE: &str = "Hello! I'm your friendly bot assistant. How can I help you today?";

pub const APOLOGY_MESSAGE: &str = "I'm sorry, I encountered an error. Please try again.";

/// 12-hour clock with two-digit hour, e.g. `09:05 PM`.
pub const TIME_FORMAT: &str = "%I:%M %p";

// UI text
pub const APP_TITLE: &str = "quipbot";
pub const CLEAR_CONFIRM_QUESTION: &str = "Are you sure you want to clear the chat history?";
pub const MISSING_PANELS_ERROR: &str =
    "Some interface panels do not fit the terminal. Please resize the window.";
