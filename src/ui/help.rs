use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(52, 22, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .title(Span::styled(" Remedy — Keybindings (F1 to close) ", theme.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        key_line(theme, "Global", ""),
        key_line(theme, "  Ctrl-C",         "Quit"),
        key_line(theme, "  Tab / Shift-Tab","Next / previous field"),
        key_line(theme, "  F1",             "Toggle this help"),
        Line::from(""),
        key_line(theme, "Form", ""),
        key_line(theme, "  type / Backspace", "Edit medicine or time"),
        key_line(theme, "  ← →",            "Change frequency / move day cursor"),
        key_line(theme, "  Space",          "Toggle the day under the cursor"),
        key_line(theme, "  Enter",          "Save the reminder"),
        Line::from(""),
        key_line(theme, "Saved reminders", ""),
        key_line(theme, "  ↑↓ / j k",      "Select"),
        key_line(theme, "  g / G",          "Jump first / last"),
        key_line(theme, "  d / Del",        "Delete selected reminder"),
        key_line(theme, "  t",              "Cycle color theme"),
        key_line(theme, "  q",              "Quit"),
        Line::from(""),
        key_line(theme, "Due popup", ""),
        key_line(theme, "  Enter / Esc",    "Dismiss"),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn key_line(theme: &Theme, key: &str, desc: &str) -> Line<'static> {
    if desc.is_empty() {
        Line::from(Span::styled(key.to_string(), theme.title))
    } else {
        Line::from(vec![
            Span::styled(format!("{:<20}", key), theme.text),
            Span::styled(desc.to_string(), theme.text_dim),
        ])
    }
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
