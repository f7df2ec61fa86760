use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weekday abbreviations in display order, as stored in `Reminder::days`.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Twice,
    Specific,
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Once
    }
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Once     => "Once daily",
            Frequency::Twice    => "Twice daily",
            Frequency::Specific => "Specific days",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Frequency::Once     => Frequency::Twice,
            Frequency::Twice    => Frequency::Specific,
            Frequency::Specific => Frequency::Once,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Frequency::Once     => Frequency::Specific,
            Frequency::Twice    => Frequency::Once,
            Frequency::Specific => Frequency::Twice,
        }
    }
}

/// One scheduled medicine-taking record.
///
/// `time` is always a zero-padded 24-hour "HH:MM" string — no date, no
/// timezone. `days` is serialized only for `Frequency::Specific`; a stale
/// `days` on another frequency is ignorable, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub medicine: String,
    pub time: String,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<String>>,
}

impl Reminder {
    pub fn new(medicine: String, time: String, frequency: Frequency, days: &[String]) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            medicine,
            time,
            frequency,
            days: if frequency == Frequency::Specific {
                Some(days.to_vec())
            } else {
                None
            },
        }
    }

    /// Human-readable schedule, e.g. "Once daily" or "Specific: Mon, Wed".
    pub fn schedule_label(&self) -> String {
        match self.frequency {
            Frequency::Specific => {
                let days = self.days.as_deref().unwrap_or(&[]);
                if days.is_empty() {
                    "Specific: (no days)".to_string()
                } else {
                    format!("Specific: {}", days.join(", "))
                }
            }
            other => other.label().to_string(),
        }
    }
}

/// Parse a user-typed time into canonical zero-padded "HH:MM".
/// Accepts "8:05" and "08:05"; rejects out-of-range or malformed input.
pub fn parse_hhmm(s: &str) -> Option<String> {
    let (h, m) = s.trim().split_once(':')?;
    if h.is_empty() || m.is_empty() || m.len() > 2 || h.len() > 2 {
        return None;
    }
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(format!("{:02}:{:02}", h, m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hhmm_normalizes() {
        assert_eq!(parse_hhmm("8:5"), Some("08:05".into()));
        assert_eq!(parse_hhmm("08:00"), Some("08:00".into()));
        assert_eq!(parse_hhmm("23:59"), Some("23:59".into()));
        assert_eq!(parse_hhmm(" 7:30 "), Some("07:30".into()));
    }

    #[test]
    fn parse_hhmm_rejects_garbage() {
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("noon"), None);
        assert_eq!(parse_hhmm("12"), None);
        assert_eq!(parse_hhmm("1:2:3"), None);
        assert_eq!(parse_hhmm("123:4"), None);
    }

    #[test]
    fn days_absent_for_once() {
        let r = Reminder::new("Aspirin".into(), "08:00".into(), Frequency::Once, &["Mon".into()]);
        assert!(r.days.is_none());
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("days"));
    }

    #[test]
    fn days_kept_for_specific() {
        let days = vec!["Mon".to_string(), "Fri".to_string()];
        let r = Reminder::new("Iron".into(), "09:30".into(), Frequency::Specific, &days);
        assert_eq!(r.days.as_deref(), Some(&days[..]));
        assert_eq!(r.schedule_label(), "Specific: Mon, Fri");
    }

    #[test]
    fn serde_round_trip() {
        let r = Reminder::new("Aspirin".into(), "08:00".into(), Frequency::Twice, &[]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Reminder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert!(json.contains("\"frequency\":\"twice\""));
    }

    #[test]
    fn unknown_frequency_rejected() {
        let json = r#"{"id":"x","medicine":"A","time":"08:00","frequency":"hourly"}"#;
        assert!(serde_json::from_str::<Reminder>(json).is_err());
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = Reminder::new("A".into(), "08:00".into(), Frequency::Once, &[]);
        let b = Reminder::new("A".into(), "08:00".into(), Frequency::Once, &[]);
        assert_ne!(a.id, b.id);
    }
}
