use crate::constants::APP_TITLE;
use crate::render::SessionView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-line header: title on the left, connection status on the right.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, view: &SessionView<'_>) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · your friendly bot", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, area);

    let status_color = if view.connected {
        Color::LightGreen
    } else {
        Color::LightRed
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(status_color)),
        Span::styled(view.status_text(), Style::default().fg(status_color)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(status, area);
}
