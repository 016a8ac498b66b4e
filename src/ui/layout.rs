use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body and footer strips.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into editor, controls row and result panel.
pub struct BodyRegions {
    pub editor: Rect,
    pub controls: Rect,
    pub result: Rect,
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(body);

    BodyRegions {
        editor: rows[0],
        controls: rows[1],
        result: rows[2],
    }
}

/// Length selector on the left, submit button on the right.
pub fn controls_regions(controls: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(controls);
    (columns[0], columns[1])
}
