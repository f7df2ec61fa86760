use crate::models::reminder::Reminder;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-backed reminder store. The whole collection is the unit of
/// persistence: every save re-serializes and overwrites the full array.
pub struct ReminderStore {
    path: PathBuf,
}

/// What a load produced: the valid reminders, plus how many stored entries
/// were skipped because they failed to deserialize.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub reminders: Vec<Reminder>,
    pub skipped: usize,
}

impl ReminderStore {
    /// Default location: ~/.local/share/remedy/medicineReminders.json.
    /// The file name carries the original storage key.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("remedy").join("medicineReminders.json"))
    }

    pub fn open(override_path: Option<PathBuf>) -> Result<Self> {
        let path = match override_path {
            Some(p) => p,
            None => Self::default_path().ok_or_else(|| anyhow!("no data directory"))?,
        };
        Ok(Self { path })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection. A missing file is an empty collection;
    /// a file that is not a JSON array is an error (the caller decides what
    /// to do with the on-disk data — we never wipe it here). Entries that
    /// fail Reminder validation are skipped and counted.
    pub fn load(&self) -> Result<LoadOutcome> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(LoadOutcome::default());
            }
            Err(e) => {
                return Err(e).context(format!("reading {}", self.path.display()));
            }
        };

        let entries: Vec<serde_json::Value> = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a JSON array", self.path.display()))?;

        let mut outcome = LoadOutcome::default();
        for entry in entries {
            match serde_json::from_value::<Reminder>(entry) {
                Ok(r) => outcome.reminders.push(r),
                Err(_) => outcome.skipped += 1,
            }
        }
        Ok(outcome)
    }

    /// Serialize the entire collection and overwrite the persisted value.
    pub fn save(&self, reminders: &[Reminder]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(reminders)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reminder::Frequency;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ReminderStore {
        ReminderStore::at(dir.path().join("medicineReminders.json"))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let outcome = store_in(&dir).load().unwrap();
        assert!(outcome.reminders.is_empty());
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn round_trip_is_deep_equal() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let reminders = vec![
            Reminder::new("Aspirin".into(), "08:00".into(), Frequency::Once, &[]),
            Reminder::new(
                "Iron".into(),
                "21:15".into(),
                Frequency::Specific,
                &["Mon".into(), "Thu".into()],
            ),
        ];
        store.save(&reminders).unwrap();
        let outcome = store.load().unwrap();
        assert_eq!(outcome.reminders, reminders);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = ReminderStore::at(dir.path().join("nested").join("deep").join("r.json"));
        store.save(&[]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let text = r#"[
            {"id":"a","medicine":"Aspirin","time":"08:00","frequency":"once"},
            {"id":"b","medicine":"Bad","time":"09:00","frequency":"hourly"},
            {"not":"a reminder"}
        ]"#;
        fs::write(store.path(), text).unwrap();
        let outcome = store.load().unwrap();
        assert_eq!(outcome.reminders.len(), 1);
        assert_eq!(outcome.reminders[0].medicine, "Aspirin");
        assert_eq!(outcome.skipped, 2);
    }

    #[test]
    fn non_array_file_is_an_error_and_left_alone() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ definitely not json").unwrap();
        assert!(store.load().is_err());
        // The corrupt file must survive a failed load untouched.
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ definitely not json");
    }

    #[test]
    fn stale_days_on_non_specific_survive_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let text = r#"[{"id":"a","medicine":"A","time":"08:00","frequency":"once","days":["Mon"]}]"#;
        fs::write(store.path(), text).unwrap();
        let outcome = store.load().unwrap();
        assert_eq!(outcome.reminders.len(), 1);
        assert_eq!(outcome.reminders[0].days.as_deref(), Some(&["Mon".to_string()][..]));
    }
}
