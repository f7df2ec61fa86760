use crate::checker::DueNotice;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Modal due-reminder popup. Shown for the front of the queue; the user must
/// dismiss each notice before regular input resumes.
pub fn render(f: &mut Frame, notice: &DueNotice, remaining: usize, theme: &Theme) {
    let area = centered_rect(48, 9, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.crit)
        .title(Span::styled(" Reminder ", theme.crit));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", notice.message()), theme.text)),
        Line::from(Span::styled(format!("  Scheduled for {}", notice.time), theme.text_dim)),
        Line::from(""),
        Line::from(Span::styled("  Enter to dismiss", theme.text_dim)),
    ];
    if remaining > 0 {
        lines.push(Line::from(Span::styled(
            format!("  (+{} more waiting)", remaining),
            theme.warn,
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}
