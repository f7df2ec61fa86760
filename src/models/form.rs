use crate::models::reminder::{parse_hhmm, Frequency, Reminder};

/// In-progress reminder fields, edited by the form panel.
/// Setters do no validation; `build` is the save gate.
#[derive(Debug, Default)]
pub struct ReminderForm {
    pub medicine: String,
    pub time: String,
    pub frequency: Frequency,
    /// Toggled weekdays in toggle order (only meaningful for Specific).
    pub days: Vec<String>,
}

impl ReminderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the day if absent, remove it if present.
    pub fn toggle_day(&mut self, day: &str) {
        if let Some(pos) = self.days.iter().position(|d| d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day.to_string());
        }
    }

    pub fn day_selected(&self, day: &str) -> bool {
        self.days.iter().any(|d| d == day)
    }

    /// Back to initial empty/default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Construct a new Reminder from the current fields, or None when the
    /// save preconditions fail (empty medicine, unparseable time).
    pub fn build(&self) -> Option<Reminder> {
        if self.medicine.trim().is_empty() {
            return None;
        }
        let time = parse_hhmm(&self.time)?;
        Some(Reminder::new(
            self.medicine.trim().to_string(),
            time,
            self.frequency,
            &self.days,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original() {
        let mut form = ReminderForm::new();
        assert!(!form.day_selected("Mon"));
        form.toggle_day("Mon");
        assert!(form.day_selected("Mon"));
        form.toggle_day("Mon");
        assert!(!form.day_selected("Mon"));
        assert!(form.days.is_empty());
    }

    #[test]
    fn toggle_preserves_toggle_order() {
        let mut form = ReminderForm::new();
        form.toggle_day("Fri");
        form.toggle_day("Mon");
        assert_eq!(form.days, vec!["Fri".to_string(), "Mon".to_string()]);
    }

    #[test]
    fn build_requires_medicine_and_time() {
        let mut form = ReminderForm::new();
        assert!(form.build().is_none());

        form.medicine = "Aspirin".into();
        assert!(form.build().is_none());

        form.medicine.clear();
        form.time = "08:00".into();
        assert!(form.build().is_none());

        form.medicine = "Aspirin".into();
        let r = form.build().unwrap();
        assert_eq!(r.medicine, "Aspirin");
        assert_eq!(r.time, "08:00");
    }

    #[test]
    fn build_rejects_malformed_time() {
        let mut form = ReminderForm::new();
        form.medicine = "Aspirin".into();
        form.time = "25:00".into();
        assert!(form.build().is_none());
    }

    #[test]
    fn build_sets_days_only_for_specific() {
        let mut form = ReminderForm::new();
        form.medicine = "Iron".into();
        form.time = "9:5".into();
        form.toggle_day("Mon");
        form.toggle_day("Wed");

        let r = form.build().unwrap();
        assert_eq!(r.time, "09:05");
        assert!(r.days.is_none());

        form.frequency = Frequency::Specific;
        let r = form.build().unwrap();
        assert_eq!(r.days.as_deref().unwrap(), ["Mon".to_string(), "Wed".to_string()]);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = ReminderForm::new();
        form.medicine = "Aspirin".into();
        form.time = "08:00".into();
        form.frequency = Frequency::Specific;
        form.toggle_day("Sun");
        form.reset();
        assert!(form.medicine.is_empty());
        assert!(form.time.is_empty());
        assert_eq!(form.frequency, Frequency::Once);
        assert!(form.days.is_empty());
    }
}
