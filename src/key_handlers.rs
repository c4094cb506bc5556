use crate::app::App;
use crate::app_state::AppState;
use crate::session::ChatSession;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

/// Routes a key press to whichever state currently owns the keyboard.
pub fn handle_key(key: KeyEvent, app: &mut App, session: &mut ChatSession) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.state {
        AppState::Chat => handle_chat_input(key, app, session),
        AppState::ClearConfirm => handle_clear_confirm_input(key, app, session),
        AppState::QuitConfirm => handle_quit_confirm_input(key, app),
        AppState::Quit => {}
    }
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App, session: &mut ChatSession) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.state = AppState::QuitConfirm,
            KeyCode::Char('l') => app.state = AppState::ClearConfirm,
            KeyCode::Char('k') => app.input_focused = true,
            KeyCode::Char('o') => session.set_connected(!session.is_connected()),
            KeyCode::Char('u') => app.scroll_up(),
            KeyCode::Char('d') => app.scroll_down(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.input_focused = false;
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::End => app.jump_to_latest(),
        KeyCode::Enter if app.input_focused => {
            if session.submit_draft() {
                app.jump_to_latest();
            }
        }
        KeyCode::Backspace if app.input_focused => session.backspace(),
        KeyCode::Char(c) if app.input_focused => session.type_char(c),
        KeyCode::Char('q') => app.state = AppState::QuitConfirm,
        _ => {
            debug!("ignored key {:?} (input focused: {})", key.code, app.input_focused);
        }
    }
}

pub fn handle_clear_confirm_input(key: KeyEvent, app: &mut App, session: &mut ChatSession) {
    let answer = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return,
    };

    if session.clear_chat(&mut |_: &str| answer) {
        app.jump_to_latest();
    }
    app.input_focused = true;
    app.state = AppState::Chat;
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}
