pub mod due_popup;
pub mod footer;
pub mod form_view;
pub mod help;
pub mod list_view;
pub mod theme;

use crate::app::App;
use crate::models::reminder::Frequency;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn render(f: &mut Frame, app: &mut App) {
    // Form grows by a row when the weekday checkboxes are visible.
    let form_height = if app.form.frequency == Frequency::Specific { 9 } else { 8 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    form_view::render(f, rows[0], app);
    list_view::render(f, rows[1], app);
    footer::render(f, rows[2], app);

    if app.show_help {
        help::render(f, &app.theme);
    }

    if let Some(notice) = app.due_queue.front() {
        due_popup::render(f, notice, app.due_queue.len() - 1, &app.theme);
    }
}
