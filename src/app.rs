use crate::checker::{self, DueNotice, FiredLog};
use crate::config::Config;
use crate::input::{handle_key, Action, InputContext};
use crate::models::form::ReminderForm;
use crate::models::reminder::{Frequency, Reminder, WEEKDAYS};
use crate::store::ReminderStore;
use crate::ui;
use crate::ui::theme::{Theme, ThemeVariant};
use crate::util::notify;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event};
use ratatui::widgets::ListState;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const POLL_TIMEOUT: Duration = Duration::from_millis(200);

/// Which widget owns the keyboard: the four form fields, or the saved list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Medicine,
    Time,
    Frequency,
    Days,
    List,
}

pub struct App {
    pub config: Config,

    pub theme:         Theme,
    pub theme_variant: ThemeVariant,

    pub focus:     Focus,
    pub show_help: bool,

    // Form state
    pub form:       ReminderForm,
    pub day_cursor: usize,

    // Saved reminders + list selection
    pub reminders:  Vec<Reminder>,
    pub list_state: ListState,

    // Due notices waiting to be dismissed (front is on screen)
    pub due_queue: VecDeque<DueNotice>,

    // Transient status line (save confirmations, validation hints, IO errors)
    pub status: Option<String>,

    store: ReminderStore,
    fired: FiredLog,

    check_tick: Duration,
    last_check: Instant,

    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        store: ReminderStore,
        initial_theme: ThemeVariant,
        interval_secs: u64,
    ) -> Self {
        let mut status = None;
        let reminders = match store.load() {
            Ok(outcome) => {
                if outcome.skipped > 0 {
                    status = Some(format!(
                        "Skipped {} invalid stored entr{}",
                        outcome.skipped,
                        if outcome.skipped == 1 { "y" } else { "ies" }
                    ));
                }
                outcome.reminders
            }
            Err(e) => {
                // Start empty; the file on disk stays as-is until the first
                // user mutation overwrites it.
                status = Some(format!("Could not read store: {:#}", e));
                Vec::new()
            }
        };

        let mut list_state = ListState::default();
        if !reminders.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            config,
            theme:         Theme::for_variant(initial_theme),
            theme_variant: initial_theme,
            focus:         Focus::Medicine,
            show_help:     false,
            form:          ReminderForm::new(),
            day_cursor:    0,
            reminders,
            list_state,
            due_queue:     VecDeque::new(),
            status,
            store,
            fired:         FiredLog::new(),
            check_tick:    Duration::from_secs(interval_secs.max(1)),
            last_check:    Instant::now(),
            should_quit:   false,
        }
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| ui::render(f, self))?;

            if event::poll(POLL_TIMEOUT)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != event::KeyEventKind::Release {
                        let action = handle_key(key, self.context());
                        self.handle_action(action);
                    }
                }
            }

            if self.should_quit {
                break;
            }

            if self.last_check.elapsed() >= self.check_tick {
                self.run_check();
                self.last_check = Instant::now();
            }
        }
        Ok(())
    }

    /// Keyboard routing context for the current frame.
    pub fn context(&self) -> InputContext {
        if !self.due_queue.is_empty() {
            return InputContext::Modal;
        }
        match self.focus {
            Focus::Medicine | Focus::Time => InputContext::TextField,
            Focus::Frequency | Focus::Days => InputContext::Selector,
            Focus::List => InputContext::List,
        }
    }

    // ── Input dispatch ────────────────────────────────────────────────

    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ShowHelp | Action::Back | Action::Confirm => self.show_help = false,
                _ => {}
            }
            return;
        }

        // A due notice is modal: only dismissal gets through.
        if !self.due_queue.is_empty() {
            match action {
                Action::Quit => self.should_quit = true,
                Action::Confirm => {
                    self.due_queue.pop_front();
                }
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,

            Action::ShowHelp => self.show_help = true,

            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
            }

            Action::FocusNext => self.cycle_focus(1),
            Action::FocusPrev => self.cycle_focus(-1),

            Action::Input(c) => match self.focus {
                Focus::Medicine => self.form.medicine.push(c),
                Focus::Time => {
                    // Mimic a time input control: digits and one colon, "HH:MM" wide.
                    if self.form.time.len() < 5 && (c.is_ascii_digit() || c == ':') {
                        self.form.time.push(c);
                    }
                }
                _ => {}
            },

            Action::Backspace => match self.focus {
                Focus::Medicine => {
                    self.form.medicine.pop();
                }
                Focus::Time => {
                    self.form.time.pop();
                }
                _ => {}
            },

            Action::CycleLeft => match self.focus {
                Focus::Frequency => self.form.frequency = self.form.frequency.prev(),
                Focus::Days => {
                    self.day_cursor = self.day_cursor.checked_sub(1).unwrap_or(WEEKDAYS.len() - 1);
                }
                _ => {}
            },

            Action::CycleRight => match self.focus {
                Focus::Frequency => self.form.frequency = self.form.frequency.next(),
                Focus::Days => self.day_cursor = (self.day_cursor + 1) % WEEKDAYS.len(),
                _ => {}
            },

            Action::Toggle => {
                if self.focus == Focus::Days {
                    self.form.toggle_day(WEEKDAYS[self.day_cursor]);
                }
            }

            Action::Confirm => match self.focus {
                Focus::List => {}
                _ => self.save_form(),
            },

            Action::SelectUp => self.select_delta(-1),
            Action::SelectDown => self.select_delta(1),

            Action::JumpTop => {
                if self.focus == Focus::List && !self.reminders.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            Action::JumpBottom => {
                if self.focus == Focus::List && !self.reminders.is_empty() {
                    self.list_state.select(Some(self.reminders.len() - 1));
                }
            }

            Action::Delete => {
                if self.focus == Focus::List {
                    self.delete_selected();
                }
            }

            Action::Back => {}
            Action::None => {}
        }
    }

    fn cycle_focus(&mut self, dir: i32) {
        // Days is only reachable while the frequency is Specific, matching
        // the conditional checkbox row.
        let order: &[Focus] = if self.form.frequency == Frequency::Specific {
            &[Focus::Medicine, Focus::Time, Focus::Frequency, Focus::Days, Focus::List]
        } else {
            &[Focus::Medicine, Focus::Time, Focus::Frequency, Focus::List]
        };
        let cur = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = (cur as i32 + dir).rem_euclid(order.len() as i32) as usize;
        self.focus = order[next];
    }

    fn select_delta(&mut self, delta: i32) {
        if self.focus != Focus::List || self.reminders.is_empty() {
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0) as i32;
        let next = (cur + delta).clamp(0, self.reminders.len() as i32 - 1) as usize;
        self.list_state.select(Some(next));
    }

    // ── Save / delete ─────────────────────────────────────────────────

    fn save_form(&mut self) {
        let reminder = match self.form.build() {
            Some(r) => r,
            None => {
                self.status = Some(if self.form.medicine.trim().is_empty() {
                    "Medicine name is required".to_string()
                } else {
                    "Time must be HH:MM (24-hour)".to_string()
                });
                return;
            }
        };

        self.status = Some(format!("Saved {} at {}", reminder.medicine, reminder.time));
        self.reminders.push(reminder);
        self.persist();

        self.form.reset();
        self.day_cursor = 0;
        // Reset can hide the Days row; park focus back on the first field.
        self.focus = Focus::Medicine;
        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    fn delete_selected(&mut self) {
        let id = match self.list_state.selected().and_then(|i| self.reminders.get(i)) {
            Some(r) => r.id.clone(),
            None => return,
        };
        self.delete_by_id(&id);
    }

    /// Remove the reminder with the given id, if present. Absent ids are a
    /// silent no-op; the order of the remaining entries is preserved.
    pub fn delete_by_id(&mut self, id: &str) {
        let pos = match self.reminders.iter().position(|r| r.id == id) {
            Some(p) => p,
            None => return,
        };
        let removed = self.reminders.remove(pos);
        self.status = Some(format!("Deleted {}", removed.medicine));
        self.persist();

        if self.reminders.is_empty() {
            self.list_state.select(None);
        } else if let Some(sel) = self.list_state.selected() {
            if sel >= self.reminders.len() {
                self.list_state.select(Some(self.reminders.len() - 1));
            }
        }
    }

    /// Overwrite the persisted collection. Write failures are surfaced on
    /// the status line; the in-memory mutation stands.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.reminders) {
            self.status = Some(format!("Save failed: {:#}", e));
        }
    }

    // ── Due check tick ────────────────────────────────────────────────

    fn run_check(&mut self) {
        let now = Local::now();
        let (hhmm, stamp) = checker::minute_of(&now);
        let notices = checker::check(&self.reminders, &mut self.fired, &hhmm, &stamp);
        if notices.is_empty() {
            return;
        }
        if self.config.notifications.notify_send {
            notify::notify_send(&notices);
        }
        self.due_queue.extend(notices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::DueNotice;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let store = ReminderStore::at(dir.path().join("medicineReminders.json"));
        App::new(Config::default(), store, ThemeVariant::Default, 60)
    }

    fn type_into(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Input(c));
        }
    }

    #[test]
    fn save_appends_persists_and_resets() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_into(&mut app, "Aspirin");
        app.focus = Focus::Time;
        type_into(&mut app, "08:00");
        app.handle_action(Action::Confirm);

        assert_eq!(app.reminders.len(), 1);
        assert_eq!(app.reminders[0].medicine, "Aspirin");
        assert_eq!(app.reminders[0].time, "08:00");
        assert!(app.form.medicine.is_empty());
        assert!(app.form.time.is_empty());
        assert_eq!(app.form.frequency, Frequency::Once);

        // A fresh App over the same store sees the saved reminder.
        let again = app_in(&dir);
        assert_eq!(again.reminders, app.reminders);
    }

    #[test]
    fn save_with_missing_fields_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.handle_action(Action::Confirm);
        assert!(app.reminders.is_empty());

        type_into(&mut app, "Aspirin");
        app.handle_action(Action::Confirm);
        assert!(app.reminders.is_empty());
        assert_eq!(app.status.as_deref(), Some("Time must be HH:MM (24-hour)"));
    }

    #[test]
    fn time_field_rejects_letters_and_overflow() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.focus = Focus::Time;
        type_into(&mut app, "ab08:00pm99");
        assert_eq!(app.form.time, "08:00");
    }

    #[test]
    fn specific_days_are_saved_in_toggle_order() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_into(&mut app, "Iron");
        app.focus = Focus::Time;
        type_into(&mut app, "9:30");

        app.focus = Focus::Frequency;
        app.handle_action(Action::CycleRight); // Twice
        app.handle_action(Action::CycleRight); // Specific

        app.focus = Focus::Days;
        app.handle_action(Action::Toggle); // Mon
        app.handle_action(Action::CycleRight);
        app.handle_action(Action::CycleRight);
        app.handle_action(Action::Toggle); // Wed

        app.handle_action(Action::Confirm);
        assert_eq!(app.reminders.len(), 1);
        assert_eq!(app.reminders[0].time, "09:30");
        assert_eq!(
            app.reminders[0].days.as_deref().unwrap(),
            ["Mon".to_string(), "Wed".to_string()]
        );
    }

    #[test]
    fn delete_preserves_order_and_ignores_absent_ids() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        for (med, time) in [("A", "08:00"), ("B", "09:00"), ("C", "10:00")] {
            app.form.medicine = med.into();
            app.form.time = time.into();
            app.handle_action(Action::Confirm);
        }
        let b_id = app.reminders[1].id.clone();

        app.delete_by_id(&b_id);
        let names: Vec<&str> = app.reminders.iter().map(|r| r.medicine.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        app.delete_by_id("no-such-id");
        assert_eq!(app.reminders.len(), 2);
    }

    #[test]
    fn delete_via_list_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        for (med, time) in [("A", "08:00"), ("B", "09:00")] {
            app.form.medicine = med.into();
            app.form.time = time.into();
            app.handle_action(Action::Confirm);
        }
        app.focus = Focus::List;
        app.handle_action(Action::SelectDown);
        app.handle_action(Action::Delete);
        assert_eq!(app.reminders.len(), 1);
        assert_eq!(app.reminders[0].medicine, "A");
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn due_popup_is_modal_until_dismissed() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.due_queue.push_back(DueNotice {
            medicine: "Aspirin".into(),
            time: "08:00".into(),
        });
        assert_eq!(app.context(), InputContext::Modal);

        // Typing while the popup is up must not touch the form.
        app.handle_action(Action::Input('x'));
        assert!(app.form.medicine.is_empty());

        app.handle_action(Action::Confirm);
        assert!(app.due_queue.is_empty());
        assert_eq!(app.context(), InputContext::TextField);
    }

    #[test]
    fn days_focus_only_reachable_when_specific() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.focus = Focus::Frequency;
        app.handle_action(Action::FocusNext);
        assert_eq!(app.focus, Focus::List);

        app.focus = Focus::Frequency;
        app.form.frequency = Frequency::Specific;
        app.handle_action(Action::FocusNext);
        assert_eq!(app.focus, Focus::Days);
    }

    #[test]
    fn corrupt_store_starts_empty_with_status() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("medicineReminders.json"), "not json").unwrap();
        let app = app_in(&dir);
        assert!(app.reminders.is_empty());
        assert!(app.status.as_deref().unwrap().starts_with("Could not read store"));
    }
}
