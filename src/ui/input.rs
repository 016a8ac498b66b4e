use crate::prompt::SummaryLength;
use crate::ui::app::{App, Focus};
use crate::ui::request::RequestIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global shortcuts work regardless of focus.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 's') {
        app.submit();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.dispatch_request(RequestIntent::CycleLength { forward: true });
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_summary(Instant::now());
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch_request(RequestIntent::ClearInput);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Input => handle_editor_key(app, key),
        Focus::Length => match key.code {
            KeyCode::Left | KeyCode::Up => {
                app.dispatch_request(RequestIntent::CycleLength { forward: false })
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                app.dispatch_request(RequestIntent::CycleLength { forward: true })
            }
            KeyCode::Char(ch) => {
                if let Some(length) = length_for_digit(ch) {
                    app.dispatch_request(RequestIntent::SelectLength(length));
                }
            }
            KeyCode::Enter => app.set_focus(Focus::Submit),
            KeyCode::Esc => app.set_focus(Focus::Input),
            _ => {}
        },
        Focus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.submit();
            }
            KeyCode::Esc => app.set_focus(Focus::Input),
            _ => {}
        },
        Focus::Copy => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.copy_summary(Instant::now()),
            KeyCode::Esc => app.set_focus(Focus::Input),
            _ => {}
        },
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            RequestIntent::InsertChar(ch)
        }
        KeyCode::Enter => RequestIntent::InsertChar('\n'),
        KeyCode::Backspace => RequestIntent::Backspace,
        KeyCode::Delete => RequestIntent::Delete,
        KeyCode::Left => RequestIntent::CursorLeft,
        KeyCode::Right => RequestIntent::CursorRight,
        KeyCode::Home => RequestIntent::CursorLineStart,
        KeyCode::End => RequestIntent::CursorLineEnd,
        KeyCode::Esc => {
            app.set_focus(Focus::Submit);
            return;
        }
        _ => return,
    };
    app.dispatch_request(intent);
}

fn length_for_digit(ch: char) -> Option<SummaryLength> {
    let index = ch.to_digit(10)? as usize;
    SummaryLength::ALL
        .get(index.checked_sub(1)?)
        .copied()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
