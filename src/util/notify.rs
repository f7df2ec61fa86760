use crate::checker::DueNotice;

/// Fire a desktop notification via `notify-send` for newly-due reminders.
/// Best-effort: silently ignored if notify-send is not installed or DISPLAY
/// is unset.
pub fn notify_send(notices: &[DueNotice]) {
    for notice in notices {
        let _ = std::process::Command::new("notify-send")
            .args([
                "--urgency", "critical",
                "--app-name", "remedy",
                "Medicine reminder",
                &notice.message(),
            ])
            .spawn();
    }
}
