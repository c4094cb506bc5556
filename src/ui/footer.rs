use crate::app::App;
use crate::app_state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draws the footer with key hints for the current state
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let instructions = match app.state {
        AppState::Chat if app.input_focused => {
            "Enter send · Ctrl+L clear · Esc unfocus · PgUp/PgDn scroll · Ctrl+C quit"
        }
        AppState::Chat => "Ctrl+K focus input · q quit · Ctrl+O toggle offline",
        AppState::ClearConfirm => "Press 'y' to clear the chat or 'n' to cancel.",
        AppState::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        AppState::Quit => "",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
