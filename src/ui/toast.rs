use crate::notification::{Notification, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::LightBlue,
        Severity::Success => Color::LightGreen,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::LightRed,
    }
}

/// Top-right toast, sized to its message.
pub fn draw_toast(f: &mut Frame<'_>, area: Rect, notification: &Notification) {
    let wanted = notification.message.width() as u16 + 4;
    let width = wanted.min(area.width).min(50);
    let inner_width = width.saturating_sub(2).max(1);
    let rows = (notification.message.width() as u16).div_ceil(inner_width).max(1);
    let height = (rows + 2).min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1u16.min(area.height.saturating_sub(height)),
        width,
        height,
    };

    let color = severity_color(notification.severity);
    let toast = Paragraph::new(notification.message.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notification.severity.as_str()))
                .border_style(Style::default().fg(color)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, toast_area);
    f.render_widget(toast, toast_area);
}
