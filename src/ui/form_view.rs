use crate::app::{App, Focus};
use crate::models::reminder::{Frequency, WEEKDAYS};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus != Focus::List;
    let border_style = if focused { app.theme.border_focused } else { app.theme.border };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(" Create a Medicine Reminder ", app.theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(text_field(
        "Medicine",
        &app.form.medicine,
        "e.g., Aspirin",
        app.focus == Focus::Medicine,
        app,
    ));
    lines.push(text_field(
        "Time",
        &app.form.time,
        "HH:MM",
        app.focus == Focus::Time,
        app,
    ));

    // Frequency selector: ◂ Once daily ▸
    let freq_focused = app.focus == Focus::Frequency;
    lines.push(Line::from(vec![
        label("Frequency", freq_focused, theme),
        Span::styled(if freq_focused { "◂ " } else { "  " }, theme.text_dim),
        Span::styled(
            app.form.frequency.label(),
            if freq_focused { theme.selected } else { theme.text },
        ),
        Span::styled(if freq_focused { " ▸" } else { "  " }, theme.text_dim),
    ]));

    // Weekday checkboxes, only while frequency is Specific.
    if app.form.frequency == Frequency::Specific {
        let days_focused = app.focus == Focus::Days;
        let mut spans = vec![label("Days", days_focused, theme)];
        for (i, day) in WEEKDAYS.iter().enumerate() {
            let mark = if app.form.day_selected(day) { "[x]" } else { "[ ]" };
            let style = if days_focused && i == app.day_cursor {
                theme.selected
            } else if app.form.day_selected(day) {
                theme.ok
            } else {
                theme.text_dim
            };
            spans.push(Span::styled(format!("{} {}  ", mark, day), style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));

    // Status line: validation hints, save confirmations, store errors.
    if let Some(status) = &app.status {
        let style = if status.starts_with("Saved") || status.starts_with("Deleted") {
            theme.ok
        } else if status.starts_with("Save failed") || status.starts_with("Could not") {
            theme.crit
        } else {
            theme.warn
        };
        lines.push(Line::from(Span::styled(format!("  {}", status), style)));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn label(name: &str, focused: bool, theme: &crate::ui::theme::Theme) -> Span<'static> {
    Span::styled(
        format!("  {:<11}", name),
        if focused { theme.title } else { theme.text_dim },
    )
}

fn text_field(name: &str, value: &str, placeholder: &str, focused: bool, app: &App) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = vec![label(name, focused, theme)];
    if value.is_empty() && !focused {
        spans.push(Span::styled(placeholder.to_string(), theme.text_dim));
    } else {
        spans.push(Span::styled(value.to_string(), theme.text));
    }
    if focused {
        spans.push(Span::styled("▏", theme.border_focused));
    }
    Line::from(spans)
}
