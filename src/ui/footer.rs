use crate::app::{App, Focus};
use crate::input::InputContext;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let base: &[(&str, &str)] = match app.context() {
        InputContext::Modal => &[("Enter", "Dismiss"), ("Ctrl-C", "Quit")],
        InputContext::TextField => &[
            ("type", "Edit"), ("Tab", "Next field"), ("Enter", "Save"),
            ("F1", "Help"), ("Ctrl-C", "Quit"),
        ],
        InputContext::Selector => {
            if app.focus == Focus::Days {
                &[
                    ("←→", "Move"), ("Space", "Toggle day"), ("Tab", "Next field"),
                    ("Enter", "Save"), ("F1", "Help"),
                ]
            } else {
                &[
                    ("←→", "Change"), ("Tab", "Next field"), ("Enter", "Save"),
                    ("F1", "Help"),
                ]
            }
        }
        InputContext::List => &[
            ("↑↓/jk", "Select"), ("d", "Delete"), ("Tab", "Form"),
            ("t", "Theme"), ("F1", "Help"), ("q", "Quit"),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::styled(" ", theme.footer_bg)];
    for (key, desc) in base {
        spans.push(Span::styled(format!(" {} ", key), theme.footer_key));
        spans.push(Span::styled(format!("{}  ", desc), theme.footer_text));
    }

    // Pad the rest of the row with the footer background
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = (area.width as usize).saturating_sub(used);
    spans.push(Span::styled(" ".repeat(pad), theme.footer_bg));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
