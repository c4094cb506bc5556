use crate::errors::ValidationError;
use std::time::Duration;
use tokio::time::Instant;

/// Last accepted user submission, kept for the duplicate guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSubmission {
    pub text: String,
    pub at: Instant,
}

/// Length and spam rules applied to every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRules {
    pub max_length: usize,
    pub duplicate_window: Duration,
}

impl InputRules {
    /// Returns the trimmed text when the submission may go through.
    pub fn validate<'a>(
        &self,
        raw: &'a str,
        last: Option<&LastSubmission>,
        now: Instant,
    ) -> Result<&'a str, ValidationError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ValidationError::Empty);
        }

        let length = text.chars().count();
        if length > self.max_length {
            return Err(ValidationError::TooLong {
                length,
                max: self.max_length,
            });
        }

        if let Some(last) = last {
            if last.text == text && now.saturating_duration_since(last.at) < self.duplicate_window
            {
                return Err(ValidationError::Duplicate);
            }
        }

        Ok(text)
    }
}

/// What happened to a keystroke sent to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftEdit {
    Inserted,
    /// The character was taken and the draft is now full.
    LimitReached,
    Refused,
}

/// The text-entry buffer, capped at the maximum message length.
#[derive(Debug, Clone)]
pub struct InputController {
    draft: String,
    max_length: usize,
}

impl InputController {
    pub fn new(max_length: usize) -> Self {
        Self {
            draft: String::new(),
            max_length,
        }
    }

    pub fn insert(&mut self, c: char) -> DraftEdit {
        let count = self.char_count();
        if count >= self.max_length {
            return DraftEdit::Refused;
        }
        self.draft.push(c);
        if count + 1 >= self.max_length {
            DraftEdit::LimitReached
        } else {
            DraftEdit::Inserted
        }
    }

    /// Replaces the draft, truncating to the limit. Returns true if truncated.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.draft = text.chars().take(self.max_length).collect();
        text.chars().count() > self.max_length
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    pub fn text(&self) -> &str {
        &self.draft
    }

    pub fn char_count(&self) -> usize {
        self.draft.chars().count()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// `n/max` counter shown under the input.
    pub fn counter(&self) -> String {
        format!("{}/{}", self.char_count(), self.max_length)
    }

    pub fn can_send(&self, reply_pending: bool) -> bool {
        !reply_pending && !self.draft.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> InputRules {
        InputRules {
            max_length: 1000,
            duplicate_window: Duration::from_millis(2000),
        }
    }

    #[test]
    fn rejects_blank_input() {
        let now = Instant::now();
        assert_eq!(rules().validate("", None, now), Err(ValidationError::Empty));
        assert_eq!(
            rules().validate(" \t\n ", None, now),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn rejects_overlong_input_after_trimming() {
        let now = Instant::now();
        let exact = "a".repeat(1000);
        assert_eq!(rules().validate(&format!("  {}  ", exact), None, now), Ok(exact.as_str()));

        let long = "a".repeat(1001);
        assert!(matches!(
            rules().validate(&long, None, now),
            Err(ValidationError::TooLong { length: 1001, max: 1000 })
        ));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let now = Instant::now();
        let exact = "é".repeat(1000);
        assert_eq!(exact.len(), 2000);
        assert_eq!(rules().validate(&exact, None, now), Ok(exact.as_str()));

        let long = "é".repeat(1001);
        assert!(matches!(
            rules().validate(&long, None, now),
            Err(ValidationError::TooLong { length: 1001, max: 1000 })
        ));
    }

    #[test]
    fn draft_cap_counts_chars() {
        let mut input = InputController::new(2);
        assert_eq!(input.insert('日'), DraftEdit::Inserted);
        assert_eq!(input.insert('本'), DraftEdit::LimitReached);
        assert_eq!(input.insert('語'), DraftEdit::Refused);
        assert_eq!(input.counter(), "2/2");
    }

    #[test]
    fn duplicate_guard_respects_window() {
        let start = Instant::now();
        let last = LastSubmission {
            text: "ping".to_string(),
            at: start,
        };

        let soon = start + Duration::from_millis(1999);
        assert_eq!(
            rules().validate(" ping ", Some(&last), soon),
            Err(ValidationError::Duplicate)
        );
        assert_eq!(rules().validate("pong", Some(&last), soon), Ok("pong"));

        let later = start + Duration::from_millis(2000);
        assert_eq!(rules().validate("ping", Some(&last), later), Ok("ping"));
    }

    #[test]
    fn draft_is_capped() {
        let mut input = InputController::new(3);
        assert_eq!(input.insert('a'), DraftEdit::Inserted);
        assert_eq!(input.insert('b'), DraftEdit::Inserted);
        assert_eq!(input.insert('c'), DraftEdit::LimitReached);
        assert_eq!(input.insert('d'), DraftEdit::Refused);
        assert_eq!(input.text(), "abc");
        assert_eq!(input.counter(), "3/3");

        input.backspace();
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn set_text_truncates() {
        let mut input = InputController::new(4);
        assert!(input.set_text("abcdef"));
        assert_eq!(input.text(), "abcd");
        assert!(!input.set_text("xy"));
        assert_eq!(input.text(), "xy");
    }

    #[test]
    fn send_enabled_only_with_text_and_no_pending_reply() {
        let mut input = InputController::new(10);
        assert!(!input.can_send(false));
        input.set_text("  ");
        assert!(!input.can_send(false));
        input.set_text("hey");
        assert!(input.can_send(false));
        assert!(!input.can_send(true));
    }
}
