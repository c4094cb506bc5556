use crate::errors::ChatResult;
use crate::message::Message;
use crate::notification::Notification;

/// Borrowed snapshot of everything a front end needs to draw one frame.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub messages: &'a [Message],
    pub typing: bool,
    pub connected: bool,
    pub notification: Option<&'a Notification>,
    pub draft: &'a str,
    pub counter: String,
    pub can_send: bool,
}

impl SessionView<'_> {
    pub fn status_text(&self) -> &'static str {
        if self.connected {
            "Connected"
        } else {
            "Offline"
        }
    }
}

/// A front end that can reflect a session. Implementations are swappable; the
/// session does not know which one is attached.
pub trait ChatRenderer {
    fn render(&mut self, view: &SessionView<'_>) -> ChatResult<()>;
}
