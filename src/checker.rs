use crate::models::reminder::Reminder;
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// A due-reminder notice, presented as a modal popup in the TUI and a
/// desktop notification in daemon mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DueNotice {
    pub medicine: String,
    pub time: String,
}

impl DueNotice {
    pub fn message(&self) -> String {
        format!("Time to take your medicine: {}", self.medicine)
    }
}

/// ("HH:MM", "YYYY-MM-DD HH:MM") for the given instant. The first is what
/// reminder times are matched against, the second keys the fired log.
pub fn minute_of(now: &DateTime<Local>) -> (String, String) {
    (
        now.format("%H:%M").to_string(),
        now.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// All reminders whose stored time string-equals the given "HH:MM".
/// Frequency and days are recorded on the Reminder but not consulted here.
pub fn due_at<'a>(reminders: &'a [Reminder], hhmm: &str) -> Vec<&'a Reminder> {
    reminders.iter().filter(|r| r.time == hhmm).collect()
}

/// Tracks which reminders already fired in which calendar minute, so a
/// reminder notifies at most once per matching minute no matter how many
/// check ticks land inside it.
#[derive(Debug, Default)]
pub struct FiredLog {
    fired: HashMap<String, String>,
}

impl FiredLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly once per (reminder, minute) pair.
    pub fn should_fire(&mut self, id: &str, minute_stamp: &str) -> bool {
        match self.fired.get(id) {
            Some(prev) if prev == minute_stamp => false,
            _ => {
                self.fired.insert(id.to_string(), minute_stamp.to_string());
                true
            }
        }
    }
}

/// One check tick: collect notices for every reminder matching `hhmm` that
/// has not already fired in the minute identified by `minute_stamp`.
pub fn check(reminders: &[Reminder], fired: &mut FiredLog, hhmm: &str, minute_stamp: &str) -> Vec<DueNotice> {
    due_at(reminders, hhmm)
        .into_iter()
        .filter(|r| fired.should_fire(&r.id, minute_stamp))
        .map(|r| DueNotice {
            medicine: r.medicine.clone(),
            time: r.time.clone(),
        })
        .collect()
}
