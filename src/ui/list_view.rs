use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::List;
    let border_style = if focused { app.theme.border_focused } else { app.theme.border };

    let title = if app.reminders.is_empty() {
        " Saved Reminders ".to_string()
    } else {
        format!(" Saved Reminders ({}) ", app.reminders.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(title, app.theme.title));

    if app.reminders.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("  No reminders yet.", app.theme.text_dim))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .reminders
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::styled("  ", app.theme.text),
                Span::styled(r.medicine.clone(), app.theme.title),
                Span::styled("  at ", app.theme.text_dim),
                Span::styled(r.time.clone(), app.theme.text),
                Span::styled(format!("  ({})", r.schedule_label()), app.theme.text_dim),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.theme.selected);

    f.render_stateful_widget(list, area, &mut app.list_state);
}
