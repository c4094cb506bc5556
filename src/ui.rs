// src/ui.rs

pub mod bubble;
pub mod chat;
pub mod confirm;
pub mod footer;
pub mod header;
pub mod toast;

use crate::app::{App, Panel};
use crate::app_state::AppState;
use crate::constants::{CLEAR_CONFIRM_QUESTION, MISSING_PANELS_ERROR};
use crate::errors::ChatResult;
use crate::key_handlers::handle_key;
use crate::notification::Severity;
use crate::render::{ChatRenderer, SessionView};
use crate::session::ChatSession;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

const INPUT_HEIGHT: u16 = 3;
const MIN_MESSAGES_HEIGHT: u16 = 3;

/// Regions of one frame. Optional panels are `None` once disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Option<Rect>,
    pub messages: Rect,
    pub typing: Option<Rect>,
    pub input: Rect,
    pub footer: Option<Rect>,
}

/// Splits `area`, dropping optional panels (footer first) that no longer fit.
pub fn chat_layout(area: Rect, app: &mut App) -> ChatLayout {
    let optional = [Panel::Footer, Panel::Header, Panel::TypingIndicator];
    let mut needed = MIN_MESSAGES_HEIGHT
        + INPUT_HEIGHT
        + optional
            .iter()
            .filter(|p| app.is_panel_enabled(**p))
            .count() as u16;

    for panel in optional {
        if needed <= area.height {
            break;
        }
        if app.is_panel_enabled(panel) {
            app.disable_panel(panel);
            needed -= 1;
        }
    }

    let header = app.is_panel_enabled(Panel::Header);
    let typing = app.is_panel_enabled(Panel::TypingIndicator);
    let footer = app.is_panel_enabled(Panel::Footer);

    let mut constraints = Vec::new();
    if header {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(MIN_MESSAGES_HEIGHT));
    if typing {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(INPUT_HEIGHT));
    if footer {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    let mut next = || {
        let rect = chunks[idx];
        idx += 1;
        rect
    };

    ChatLayout {
        header: header.then(&mut next),
        messages: next(),
        typing: typing.then(&mut next),
        input: next(),
        footer: footer.then(&mut next),
    }
}

/// Renders one full frame.
pub fn draw(f: &mut Frame<'_>, view: &SessionView<'_>, app: &mut App) {
    app.status_indicator.set_typing(view.typing);

    let area = f.area();
    let layout = chat_layout(area, app);

    if let Some(rect) = layout.header {
        header::draw_header(f, rect, view);
    }
    chat::draw_messages(f, layout.messages, view, app);
    if let Some(rect) = layout.typing {
        app.status_indicator.render(f, rect);
    }
    chat::draw_input(f, layout.input, view, app);
    if let Some(rect) = layout.footer {
        footer::draw_footer(f, rect, app);
    }

    match app.state {
        AppState::ClearConfirm => confirm::draw_confirm(f, area, "Clear chat", CLEAR_CONFIRM_QUESTION),
        AppState::QuitConfirm => {
            confirm::draw_confirm(f, area, "Confirm quit", "Are you sure you want to quit?")
        }
        AppState::Chat | AppState::Quit => {}
    }

    if let Some(notification) = view.notification {
        toast::draw_toast(f, area, notification);
    }
}

/// Full-screen front end on any ratatui backend.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    app: App,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            app: App::new(),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Raises the one-time error for panels dropped during the last frame.
    pub fn report_layout_errors(&mut self, session: &mut ChatSession) {
        let dropped = self.app.take_unreported_panels();
        if dropped.is_empty() {
            return;
        }
        let names: Vec<&str> = dropped.iter().map(Panel::name).collect();
        warn!("disabled panels that do not fit: {}", names.join(", "));
        session.notify(MISSING_PANELS_ERROR, Severity::Error);
    }
}

impl<B: Backend> ChatRenderer for TuiRenderer<B> {
    fn render(&mut self, view: &SessionView<'_>) -> ChatResult<()> {
        let app = &mut self.app;
        self.terminal.draw(|f| draw(f, view, app))?;
        Ok(())
    }
}

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the user quits.
pub async fn run_tui(mut session: ChatSession) -> ChatResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let mut renderer = TuiRenderer::new(terminal);

    info!("tui session started");
    let res = run_app(&mut renderer, &mut session).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(renderer.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    renderer.terminal_mut().show_cursor()?;

    if let Err(err) = &res {
        error!("tui session failed: {}", err);
    }
    info!("tui session ended");
    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    renderer: &mut TuiRenderer<B>,
    session: &mut ChatSession,
) -> ChatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    spawn_input_reader(tx);

    loop {
        let now = Instant::now();
        session.complete_due_reply(now);
        session.prune_notifications(now);
        renderer.render(&session.view(now))?;
        renderer.report_layout_errors(session);

        if renderer.app().state == AppState::Quit {
            break;
        }

        let wakeup = session.next_wakeup();
        let event = tokio::select! {
            Some(event) = rx.recv() => Some(event),
            _ = sleep_until(wakeup.unwrap_or_else(Instant::now)), if wakeup.is_some() => None,
            else => break,
        };

        match event {
            Some(Event::Input(CEvent::Key(key))) => handle_key(key, renderer.app_mut(), session),
            Some(Event::Tick) => renderer.app_mut().update_typing_animation(),
            // resizes and timer wakeups only need a redraw
            Some(Event::Input(_)) | None => {}
        }
    }

    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        let tick_rate = Duration::from_millis(100);
        let mut last_tick = std::time::Instant::now();
        loop {
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        error!("failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = std::time::Instant::now();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;

    fn screen(renderer: &TuiRenderer<TestBackend>) -> String {
        let buffer = renderer.terminal().backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn renderer(width: u16, height: u16) -> TuiRenderer<TestBackend> {
        TuiRenderer::new(Terminal::new(TestBackend::new(width, height)).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn draws_seed_status_and_counter() {
        let session = ChatSession::new(&Config::default());
        let mut tui = renderer(80, 20);

        tui.render(&session.view(Instant::now())).unwrap();
        let text = screen(&tui);

        assert!(text.contains("friendly bot assistant"));
        assert!(text.contains("Connected"));
        assert!(text.contains("0/1000"));
        assert!(!text.contains("Bot is typing"));
    }

    #[tokio::test(start_paused = true)]
    async fn shows_typing_indicator_while_reply_pending() {
        let mut session = ChatSession::new(&Config::default());
        let mut tui = renderer(80, 20);

        assert!(session.submit("hi"));
        tui.render(&session.view(Instant::now())).unwrap();
        let text = screen(&tui);
        assert!(text.contains("Bot is typing..."));
        assert!(text.contains("│ hi"));

        session.respond().await.unwrap();
        tui.render(&session.view(Instant::now())).unwrap();
        let text = screen(&tui);
        assert!(!text.contains("Bot is typing"));
        assert!(text.contains("Hello! Nice to meet you"));
    }

    #[tokio::test(start_paused = true)]
    async fn offline_status_and_toast() {
        let mut session = ChatSession::new(&Config::default());
        let mut tui = renderer(80, 20);

        session.set_connected(false);
        session.submit("");
        tui.render(&session.view(Instant::now())).unwrap();
        let text = screen(&tui);
        assert!(text.contains("Offline"));
        assert!(text.contains("Please enter a message"));
    }

    #[tokio::test(start_paused = true)]
    async fn clear_dialog_is_drawn() {
        let session = ChatSession::new(&Config::default());
        let mut tui = renderer(80, 20);
        tui.app_mut().state = AppState::ClearConfirm;

        tui.render(&session.view(Instant::now())).unwrap();
        assert!(screen(&tui).contains("Clear chat"));
    }

    #[tokio::test(start_paused = true)]
    async fn small_terminal_drops_panels_and_reports_once() {
        let mut session = ChatSession::new(&Config::default());
        let mut tui = renderer(60, 7);

        tui.render(&session.view(Instant::now())).unwrap();
        assert!(!tui.app().is_panel_enabled(Panel::Footer));
        assert!(!tui.app().is_panel_enabled(Panel::Header));
        assert!(tui.app().is_panel_enabled(Panel::TypingIndicator));

        tui.report_layout_errors(&mut session);
        let toast = session.active_notification(Instant::now()).unwrap();
        assert_eq!(toast.severity, Severity::Error);
        let first_id = toast.id;

        tui.render(&session.view(Instant::now())).unwrap();
        tui.report_layout_errors(&mut session);
        assert_eq!(
            session.active_notification(Instant::now()).unwrap().id,
            first_id
        );
    }

    /// Fills a session with enough long exchanges that a narrow pane needs
    /// more than `u16::MAX` rendered lines for the whole history.
    fn long_history(exchanges: u64) -> ChatSession {
        let mut session = ChatSession::new(&Config::default());
        let t0 = Instant::now();
        let long = "x".repeat(1000);
        for i in 0..exchanges {
            let at = t0 + Duration::from_secs(4 * i);
            assert!(session.submit_at(&long, at));
            session
                .complete_due_reply(at + Duration::from_secs(3))
                .unwrap();
        }
        assert!(session.submit_at("zebra", t0 + Duration::from_secs(4 * exchanges)));
        session
    }

    #[tokio::test(start_paused = true)]
    async fn latest_message_visible_after_long_history() {
        let session = long_history(600);
        let mut tui = renderer(12, 30);

        tui.render(&session.view(Instant::now())).unwrap();
        assert!(screen(&tui).contains("│ zebra"));
        assert!(tui.app().is_following());
    }

    #[tokio::test(start_paused = true)]
    async fn scrolling_back_through_long_history() {
        let session = long_history(600);
        let mut tui = renderer(12, 30);

        for _ in 0..10 {
            tui.app_mut().scroll_up();
        }
        tui.render(&session.view(Instant::now())).unwrap();
        let text = screen(&tui);
        assert!(!text.contains("zebra"));
        assert_eq!(tui.app().scroll, 10);

        tui.app_mut().jump_to_latest();
        tui.render(&session.view(Instant::now())).unwrap();
        assert!(screen(&tui).contains("│ zebra"));
    }

    #[tokio::test(start_paused = true)]
    async fn scroll_stops_at_oldest_message() {
        let session = ChatSession::new(&Config::default());
        let mut tui = renderer(80, 20);

        for _ in 0..50 {
            tui.app_mut().scroll_up();
        }
        tui.render(&session.view(Instant::now())).unwrap();
        assert_eq!(tui.app().scroll, 0);
        assert!(screen(&tui).contains("friendly bot assistant"));
    }

    #[test]
    fn layout_keeps_all_panels_when_room() {
        let mut app = App::new();
        let layout = chat_layout(Rect::new(0, 0, 80, 24), &mut app);
        assert_eq!(layout.header.map(|r| r.height), Some(1));
        assert_eq!(layout.typing.map(|r| r.height), Some(1));
        assert_eq!(layout.footer.map(|r| r.height), Some(1));
        assert_eq!(layout.input.height, INPUT_HEIGHT);
        assert_eq!(layout.messages.height, 24 - 3 - INPUT_HEIGHT);
    }
}
