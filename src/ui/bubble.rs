use crate::message::Message;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

fn base_style(message: &Message) -> Style {
    Style::default().fg(if message.is_from_user() {
        Color::Rgb(255, 223, 128) // Warmer yellow
    } else {
        Color::Rgb(144, 238, 144) // Softer green
    })
}

/// Lays out one chat bubble: header with sender and time, wrapped body, footer.
/// User bubbles are indented to set them apart from the bot's.
pub fn bubble_lines(message: &Message, width: u16) -> Vec<Line<'static>> {
    let style = base_style(message);
    let indent = if message.is_from_user() { "  " } else { "" };
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─ ".to_string(), style),
        Span::styled(
            message.sender().label().to_string(),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ".to_string(), style),
        Span::styled(message.formatted_time(), style.add_modifier(Modifier::DIM)),
    ]));

    let wrap_width = (width as usize).saturating_sub(indent.len() + 2).max(1);
    for wrapped_line in wrap(message.text(), wrap_width) {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(wrapped_line.to_string(), style),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}
