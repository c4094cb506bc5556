use crate::app_state::AppState;
use crate::status_indicator::StatusIndicator;
use std::time::{Duration, Instant};

/// Optional parts of the TUI that are dropped when the terminal is too small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Header,
    TypingIndicator,
    Footer,
}

impl Panel {
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Header => "header",
            Panel::TypingIndicator => "typing indicator",
            Panel::Footer => "footer",
        }
    }
}

/// Terminal-side state: focus, scrolling, modals and the spinner.
/// Chat data lives in the session.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub input_focused: bool,
    /// Lines scrolled back from the newest message; 0 follows the tail.
    pub scroll: u16,
    pub status_indicator: StatusIndicator,
    pub last_frame_update: Instant,
    disabled_panels: Vec<Panel>,
    unreported_panels: Vec<Panel>,
}

impl App {
    pub fn new() -> App {
        App {
            state: AppState::Chat,
            input_focused: true,
            scroll: 0,
            status_indicator: StatusIndicator::new(),
            last_frame_update: Instant::now(),
            disabled_panels: Vec::new(),
            unreported_panels: Vec::new(),
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn jump_to_latest(&mut self) {
        self.scroll = 0;
    }

    pub fn is_following(&self) -> bool {
        self.scroll == 0
    }

    pub fn update_typing_animation(&mut self) {
        if self.status_indicator.is_typing()
            && self.last_frame_update.elapsed() >= Duration::from_millis(80)
        {
            self.status_indicator.update_spinner();
            self.last_frame_update = Instant::now();
        }
    }

    pub fn is_panel_enabled(&self, panel: Panel) -> bool {
        !self.disabled_panels.contains(&panel)
    }

    /// Turns a panel off for the rest of the session. The first call per panel
    /// queues it for a one-time error report.
    pub fn disable_panel(&mut self, panel: Panel) {
        if self.is_panel_enabled(panel) {
            self.disabled_panels.push(panel);
            self.unreported_panels.push(panel);
        }
    }

    pub fn take_unreported_panels(&mut self) -> Vec<Panel> {
        std::mem::take(&mut self.unreported_panels)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
