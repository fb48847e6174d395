//! UI module for rendering the TUI

mod dialog;
mod form;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let content_area = layout::create_layout(area);
    form::draw(frame, content_area, app);
    layout::draw_status_bar(frame, app);

    // Success acknowledgment overlays the form until dismissed
    if app.show_success {
        dialog::render_success_dialog(frame);
    }
}
