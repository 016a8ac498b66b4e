//! Loading indicator, error banner and summary panel.
//!
//! Exactly one of them is drawn, chosen by the request phase.

use crate::ui::app::{App, Focus};
use crate::ui::copy::CopyFeedbackState;
use crate::ui::editor::border_style;
use crate::ui::request::RequestPhase;
use crate::ui::theme::{
    ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_result(frame: &mut Frame<'_>, area: Rect, app: &App) {
    match &app.request().phase {
        RequestPhase::Idle => render_placeholder(frame, area),
        RequestPhase::Loading { animation_tick } => render_loading(frame, area, *animation_tick),
        RequestPhase::Error { message } => render_error(frame, area, message),
        RequestPhase::Success { summary } => render_summary(frame, area, app, summary),
    }
}

fn render_placeholder(frame: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        " The summary will appear here.",
        Style::default().fg(MUTED_TEXT),
    )))
    .block(Block::default().title(" Summary ").borders(Borders::ALL).border_style(border_style(false)));
    frame.render_widget(paragraph, area);
}

fn render_loading(frame: &mut Frame<'_>, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Generating summary...", Style::default().fg(HEADER_TEXT)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_WARN)),
    );
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let lines = vec![Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(STATUS_ERROR)),
        Span::styled(message.to_string(), Style::default().fg(HEADER_TEXT)),
    ])];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(paragraph, area);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, app: &App, summary: &str) {
    let copy_focused = app.focus() == Focus::Copy;
    let paragraph = Paragraph::new(summary.to_string())
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Summary ")
                .title(copy_control(app.copy_feedback(), copy_focused).right_aligned())
                .borders(Borders::ALL)
                .border_style(border_style(copy_focused)),
        );
    frame.render_widget(paragraph, area);
}

/// Title-bar copy button, replaced by the transient confirmation.
fn copy_control(feedback: &CopyFeedbackState, focused: bool) -> Line<'static> {
    match feedback {
        CopyFeedbackState::Copied { .. } => Line::from(Span::styled(
            " ✓ Copied! ",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        CopyFeedbackState::Failed { message, .. } => Line::from(Span::styled(
            format!(" ✗ {} ", message),
            Style::default().fg(STATUS_ERROR),
        )),
        CopyFeedbackState::Idle => {
            let style = if focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(ACCENT)
            };
            Line::from(Span::styled(" ⧉ Copy ", style))
        }
    }
}
