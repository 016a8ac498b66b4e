use crate::ui::app::App;
use crate::ui::request::RequestPhase;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status, status_style) = match &app.request().phase {
            RequestPhase::Idle => ("Ready", Style::default().fg(MUTED_TEXT)),
            RequestPhase::Loading { .. } => ("Summarizing…", Style::default().fg(STATUS_WARN)),
            RequestPhase::Success { .. } => ("Done", Style::default().fg(STATUS_OK)),
            RequestPhase::Error { .. } => ("Error", Style::default().fg(STATUS_ERROR)),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "pastesum",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(app.settings().model_label.clone(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ];

        if !app.settings().credential_configured {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                "API key not configured",
                Style::default().fg(STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
