use crate::ui::app::App;
use crate::ui::controls::{render_length_selector, render_submit_button};
use crate::ui::editor::render_editor;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, controls_regions, layout_regions};
use crate::ui::result_panel::render_result;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draw the whole screen from app state.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let regions = body_regions(body);
    render_editor(frame, regions.editor, app);

    let (length_area, submit_area) = controls_regions(regions.controls);
    render_length_selector(frame, length_area, app);
    render_submit_button(frame, submit_area, app);

    render_result(frame, regions.result, app);

    frame.render_widget(Footer::new().widget(footer), footer);
}
