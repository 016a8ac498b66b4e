//! Length selector and submit button.

use crate::prompt::SummaryLength;
use crate::ui::app::{App, Focus};
use crate::ui::editor::border_style;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_length_selector(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let selected = app.request().length;
    let mut spans = vec![Span::raw(" ")];
    for length in SummaryLength::ALL {
        let style = if length == selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        let marker = if length == selected { "●" } else { "○" };
        spans.push(Span::styled(
            format!(" {} {} ({}) ", marker, length.label(), length.word_target()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Length ")
            .borders(Borders::ALL)
            .border_style(border_style(app.focus() == Focus::Length)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_submit_button(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let request = app.request();
    let label = if request.is_loading() {
        "Summarizing…"
    } else {
        "Summarize"
    };
    let style = if request.can_submit() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(app.focus() == Focus::Submit)),
        );
    frame.render_widget(paragraph, area);
}
