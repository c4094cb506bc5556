use crate::app::App;
use crate::app_state::AppState;
use crate::render::SessionView;
use crate::ui::bubble::bubble_lines;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draws the newest messages, `app.scroll` lines up from the bottom. Only the
/// bubbles needed to fill the pane are laid out, so history length never
/// reaches the renderer's `u16` line offsets.
pub fn draw_messages(f: &mut Frame<'_>, area: Rect, view: &SessionView<'_>, app: &mut App) {
    let height = area.height as usize;
    let wanted = height + app.scroll as usize;

    let mut bubbles = Vec::new();
    let mut collected = 0;
    for (idx, message) in view.messages.iter().enumerate().rev() {
        let mut bubble = Vec::new();
        if idx > 0 {
            bubble.push(Line::from(""));
        }
        bubble.extend(bubble_lines(message, area.width));
        collected += bubble.len();
        bubbles.push(bubble);
        if collected >= wanted {
            break;
        }
    }
    let lines: Vec<Line<'static>> = bubbles.into_iter().rev().flatten().collect();

    // only clamps once the oldest message has been laid out
    let max_scroll = lines.len().saturating_sub(height);
    if app.scroll as usize > max_scroll {
        app.scroll = max_scroll as u16;
    }

    let top = lines.len().saturating_sub(height + app.scroll as usize);
    let visible: Vec<Line<'static>> = lines.into_iter().skip(top).take(height).collect();
    f.render_widget(Paragraph::new(visible), area);
}

pub fn draw_input(f: &mut Frame<'_>, area: Rect, view: &SessionView<'_>, app: &App) {
    let border_color = if !app.input_focused {
        Color::DarkGray
    } else if view.can_send {
        Color::LightGreen
    } else {
        Color::Gray
    };

    let title = if app.input_focused {
        " Message "
    } else {
        " Message (Ctrl+K to focus) "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(format!(" {} ", view.counter)).right_aligned())
        .border_style(Style::default().fg(border_color));

    // keep the end of a long draft in view
    let visible_width = area.width.saturating_sub(2);
    let text_width = view.draft.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width.saturating_sub(1));

    let input = Paragraph::new(Line::from(Span::styled(
        view.draft,
        Style::default().fg(Color::White),
    )))
    .block(block)
    .scroll((0, scroll_offset));

    f.render_widget(input, area);

    if app.input_focused && app.state == AppState::Chat {
        let cursor_x = area.x + 1 + text_width - scroll_offset;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}
