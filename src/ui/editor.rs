//! Multi-line text area bound to the request input.

use crate::ui::app::{App, Focus};
use crate::ui::theme::{FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const PLACEHOLDER: &str = "Paste or type the article you want summarized…";

pub fn render_editor(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Input;
    let input = &app.request().input;

    let counts = format!(" {} words · {} chars ", input.word_count(), input.char_count());
    let block = Block::default()
        .title(" Text ")
        .title(Line::from(counts).right_aligned())
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if input.is_empty() {
        frame.render_widget(
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(MUTED_TEXT)),
            inner,
        );
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let wrapped = input.wrap(inner.width as usize);
    let (cursor_row, cursor_col) = wrapped.cursor;
    let visible_rows = inner.height as usize;
    let scroll = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    let lines: Vec<Line> = wrapped
        .lines
        .into_iter()
        .skip(scroll)
        .take(visible_rows)
        .map(Line::from)
        .collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(HEADER_TEXT)),
        inner,
    );

    if focused {
        let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + ((cursor_row - scroll) as u16).min(inner.height.saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}
