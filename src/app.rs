use crate::domain::{Countdown, DayData, TimerKind, UiMode, View};
use crate::notifications;
use crate::persistence::{FileStore, KeyValueStore, Ledger, Settings};
use anyhow::Result;
use std::time::Instant;
use tracing::info;

/// Main application state
pub struct AppState<S: KeyValueStore = FileStore> {
    pub ledger: Ledger<S>,
    pub settings: Settings,
    pub work: Countdown,
    pub rest: Countdown,
    /// Task name as typed by the user; used when the work timer starts
    pub task_name: String,
    /// Task the latest work interval was started for; new breaks are credited to it
    pub current_task: String,
    /// Task the running work interval is credited to
    pub work_task: String,
    /// Task the running break is credited to
    pub break_task: String,
    pub view: View,
    pub ui_mode: UiMode,
    pub name_input: String,
    pub alert: Option<String>,
    /// Index into the newest-first history list
    pub history_index: usize,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(ledger: Ledger<S>, settings: Settings) -> Self {
        Self {
            work: Countdown::new(TimerKind::Work, settings.work_minutes),
            rest: Countdown::new(TimerKind::Break, settings.break_minutes),
            ledger,
            settings,
            task_name: String::new(),
            current_task: String::new(),
            work_task: String::new(),
            break_task: String::new(),
            view: View::Timer,
            ui_mode: UiMode::Normal,
            name_input: String::new(),
            alert: None,
            history_index: 0,
        }
    }

    /// Show a message in the alert modal (never hides the day-changed modal)
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
        if self.ui_mode != UiMode::DayChanged {
            self.ui_mode = UiMode::Alert;
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        if self.ui_mode == UiMode::Alert {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Open the task name editor, prefilled with the current name
    pub fn start_edit_task_name(&mut self) {
        self.name_input = self.task_name.clone();
        self.ui_mode = UiMode::EditingTaskName;
    }

    pub fn name_input_add_char(&mut self, c: char) {
        self.name_input.push(c);
    }

    pub fn name_input_backspace(&mut self) {
        self.name_input.pop();
    }

    pub fn submit_task_name(&mut self) {
        self.task_name = self.name_input.trim().to_string();
        self.name_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_task_name(&mut self) {
        self.name_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Start, pause or resume the work timer
    pub fn toggle_work(&mut self, now: Instant) {
        if self.work.is_idle() {
            let name = self.task_name.trim();
            if name.is_empty() {
                self.show_alert("Please enter a name for the task");
                return;
            }
            self.current_task = name.to_string();
            self.work_task = self.current_task.clone();
            info!(task = %self.work_task, minutes = self.work.minutes, "work started");
        }
        self.work.toggle(now);
    }

    /// Stop the work timer, crediting a running interval
    pub fn reset_work(&mut self, now: Instant) -> Result<()> {
        if let Some(secs) = self.work.reset(now) {
            self.ledger.add_task_time(&self.work_task, secs)?;
        }
        Ok(())
    }

    pub fn adjust_work_minutes(&mut self, delta: i64) {
        self.work.adjust_minutes(delta);
    }

    /// Start, pause or resume the break timer
    pub fn toggle_break(&mut self, now: Instant) {
        if self.rest.is_idle() {
            if self.current_task.is_empty() {
                self.show_alert("You must first start a task");
                return;
            }
            self.break_task = self.current_task.clone();
            info!(task = %self.break_task, minutes = self.rest.minutes, "break started");
        }
        self.rest.toggle(now);
    }

    /// Stop the break timer, crediting a running interval
    pub fn reset_break(&mut self, now: Instant) -> Result<()> {
        if let Some(secs) = self.rest.reset(now) {
            self.ledger.add_break_time(&self.break_task, secs)?;
        }
        Ok(())
    }

    pub fn adjust_break_minutes(&mut self, delta: i64) {
        self.rest.adjust_minutes(delta);
    }

    /// Advance both timers and credit any interval that completed
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        let mut messages = Vec::new();

        if let Some(secs) = self.work.tick(now) {
            self.ledger.add_task_time(&self.work_task, secs)?;
            info!(task = %self.work_task, secs, "work interval completed");
            if self.settings.notifications {
                notifications::notify_work_done(&self.work_task);
            }
            messages.push(format!("Time for task {} completed", self.work_task));
        }

        if let Some(secs) = self.rest.tick(now) {
            self.ledger.add_break_time(&self.break_task, secs)?;
            info!(task = %self.break_task, secs, "break completed");
            if self.settings.notifications {
                notifications::notify_break_done(&self.break_task);
            }
            messages.push(format!("Break time from task {} ended", self.break_task));
        }

        if !messages.is_empty() {
            self.show_alert(messages.join("\n"));
        }
        Ok(())
    }

    /// Credit whatever is running (used on quit and before a rollover)
    pub fn flush_running(&mut self, now: Instant) -> Result<()> {
        self.reset_work(now)?;
        self.reset_break(now)
    }

    /// Close out the day and show its summary
    pub fn end_day(&mut self) -> Result<()> {
        self.ledger.end_day()?;
        self.view = View::Summary;
        Ok(())
    }

    /// Clear today's buffers and go back to a blank timer. A countdown still
    /// running keeps crediting the task it was started for.
    pub fn new_day(&mut self) -> Result<()> {
        self.ledger.start_new_day()?;
        self.task_name.clear();
        if self.work.is_idle() {
            self.current_task.clear();
            self.work_task.clear();
        }
        if self.rest.is_idle() {
            self.break_task.clear();
        }
        self.view = View::Timer;
        Ok(())
    }

    pub fn has_history(&self) -> bool {
        !self.ledger.data().days.is_empty()
    }

    /// Switch to the history view, most recent day selected
    pub fn open_history(&mut self) {
        if !self.has_history() {
            self.show_alert("No finished days yet");
            return;
        }
        self.history_index = 0;
        self.view = View::History;
    }

    pub fn back_to_timer(&mut self) {
        self.view = View::Timer;
    }

    pub fn history_next(&mut self) {
        let count = self.ledger.data().days.len();
        if self.history_index + 1 < count {
            self.history_index += 1;
        }
    }

    pub fn history_prev(&mut self) {
        self.history_index = self.history_index.saturating_sub(1);
    }

    /// Day currently selected in the history view
    pub fn selected_history_day(&self) -> Option<&DayData> {
        self.ledger
            .data()
            .days_newest_first()
            .get(self.history_index)
            .copied()
    }

    /// Raise the day-changed modal once the wall clock moves past the record's day
    pub fn check_day_change(&mut self, today: &str) {
        if self.ui_mode != UiMode::DayChanged && today != self.ledger.data().current_day {
            info!(from = %self.ledger.data().current_day, today, "date changed while running");
            self.ui_mode = UiMode::DayChanged;
        }
    }

    /// Credit running timers to the old day and reconcile into `today`
    pub fn roll_over(&mut self, today: &str, now: Instant) -> Result<()> {
        self.flush_running(now)?;
        self.ledger.reload(today)?;
        self.alert = None;
        self.ui_mode = UiMode::Normal;
        self.view = View::Timer;
        self.history_index = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Task;
    use crate::persistence::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn create_test_app() -> AppState<MemoryStore> {
        let ledger = Ledger::load(MemoryStore::default(), "2024-01-01").unwrap();
        let settings = Settings {
            notifications: false,
            ..Settings::default()
        };
        AppState::new(ledger, settings)
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn task(name: &str, secs: u64) -> Task {
        Task {
            name: name.to_string(),
            time_spent: secs,
        }
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.view, View::Timer);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.work.minutes, 25);
        assert_eq!(app.rest.minutes, 5);
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_work_requires_task_name() {
        let mut app = create_test_app();
        app.task_name = "   ".to_string();

        app.toggle_work(Instant::now());

        assert!(app.work.is_idle());
        assert_eq!(app.ui_mode, UiMode::Alert);
        assert_eq!(app.alert.as_deref(), Some("Please enter a name for the task"));

        app.dismiss_alert();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_break_requires_started_task() {
        let mut app = create_test_app();
        app.toggle_break(Instant::now());

        assert!(app.rest.is_idle());
        assert_eq!(app.alert.as_deref(), Some("You must first start a task"));
    }

    #[test]
    fn test_edit_task_name() {
        let mut app = create_test_app();
        app.start_edit_task_name();
        assert_eq!(app.ui_mode, UiMode::EditingTaskName);

        for c in " Focus!".chars() {
            app.name_input_add_char(c);
        }
        app.name_input_backspace();
        app.submit_task_name();

        assert_eq!(app.task_name, "Focus");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_work_completion_credits_full_interval() {
        let mut app = create_test_app();
        app.task_name = "Write".to_string();
        app.work.adjust_minutes(-24);
        let t0 = Instant::now();

        app.toggle_work(t0);
        app.tick(t0 + secs(30)).unwrap();
        assert!(app.ledger.data().current_tasks.is_empty());

        app.tick(t0 + secs(61)).unwrap();
        assert_eq!(app.ledger.data().current_tasks, vec![task("Write", 60)]);
        assert!(app.work.is_idle());
        assert_eq!(
            app.alert.as_deref(),
            Some("Time for task Write completed")
        );
    }

    #[test]
    fn test_reset_work_credits_running_time() {
        let mut app = create_test_app();
        app.task_name = "Write".to_string();
        let t0 = Instant::now();

        app.toggle_work(t0);
        app.reset_work(t0 + secs(100)).unwrap();
        app.toggle_work(t0 + secs(200));
        app.reset_work(t0 + secs(250)).unwrap();

        assert_eq!(app.ledger.data().current_tasks, vec![task("Write", 150)]);
    }

    #[test]
    fn test_break_credits_task_it_started_for() {
        let mut app = create_test_app();
        app.task_name = "Write".to_string();
        let t0 = Instant::now();

        app.toggle_work(t0);
        app.reset_work(t0 + secs(10)).unwrap();
        app.toggle_break(t0 + secs(10));

        // Starting another task mid-break doesn't move the break
        app.task_name = "Read".to_string();
        app.toggle_work(t0 + secs(20));

        app.tick(t0 + secs(10 + 300)).unwrap();
        let breaks = &app.ledger.data().current_breaks;
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].task_name, "Write");
        assert_eq!(breaks[0].time_spent, 300);
    }

    #[test]
    fn test_end_day_and_new_day() {
        let mut app = create_test_app();
        app.ledger.add_task_time("A", 100).unwrap();

        app.end_day().unwrap();
        assert_eq!(app.view, View::Summary);
        assert_eq!(app.ledger.current_day_data().tasks, &[task("A", 100)][..]);

        app.task_name = "A".to_string();
        app.new_day().unwrap();
        assert_eq!(app.view, View::Timer);
        assert!(app.ledger.data().buffers_empty());
        assert!(app.task_name.is_empty());
    }

    #[test]
    fn test_new_day_keeps_running_timers_attributed() {
        let mut app = create_test_app();
        app.task_name = "Write".to_string();
        app.work.adjust_minutes(-24);
        let t0 = Instant::now();

        app.toggle_work(t0);
        app.toggle_break(t0);
        app.end_day().unwrap();
        app.new_day().unwrap();
        assert!(app.task_name.is_empty());

        app.tick(t0 + secs(61)).unwrap();
        assert_eq!(app.ledger.data().current_tasks, vec![task("Write", 60)]);

        app.reset_break(t0 + secs(90)).unwrap();
        let breaks = &app.ledger.data().current_breaks;
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].task_name, "Write");
        assert_eq!(breaks[0].time_spent, 90);
    }

    #[test]
    fn test_new_day_clears_idle_task() {
        let mut app = create_test_app();
        app.task_name = "Write".to_string();
        let t0 = Instant::now();

        app.toggle_work(t0);
        app.reset_work(t0 + secs(10)).unwrap();
        app.new_day().unwrap();

        assert!(app.current_task.is_empty());
        assert!(app.work_task.is_empty());
        app.toggle_break(t0 + secs(20));
        assert!(app.rest.is_idle());
    }

    #[test]
    fn test_simultaneous_completions_show_both_alerts() {
        let mut app = create_test_app();
        app.task_name = "Write".to_string();
        app.work.adjust_minutes(-24);
        let t0 = Instant::now();

        app.toggle_work(t0);
        app.toggle_break(t0);
        app.tick(t0 + secs(300)).unwrap();

        assert_eq!(
            app.alert.as_deref(),
            Some("Time for task Write completed\nBreak time from task Write ended")
        );
    }

    #[test]
    fn test_history_navigation() {
        let mut app = create_test_app();
        app.open_history();
        assert_eq!(app.view, View::Timer);
        app.dismiss_alert();

        app.ledger.add_task_time("A", 100).unwrap();
        app.end_day().unwrap();
        app.roll_over("2024-01-02", Instant::now()).unwrap();
        app.ledger.add_task_time("B", 50).unwrap();
        app.end_day().unwrap();

        app.open_history();
        assert_eq!(app.view, View::History);
        assert_eq!(app.selected_history_day().unwrap().date, "2024-01-02");

        app.history_next();
        app.history_next();
        assert_eq!(app.selected_history_day().unwrap().date, "2024-01-01");

        app.history_prev();
        assert_eq!(app.selected_history_day().unwrap().date, "2024-01-02");

        app.back_to_timer();
        assert_eq!(app.view, View::Timer);
    }

    #[test]
    fn test_day_change_and_roll_over() {
        let mut app = create_test_app();
        app.task_name = "Late".to_string();
        let t0 = Instant::now();
        app.toggle_work(t0);

        app.check_day_change("2024-01-01");
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.check_day_change("2024-01-02");
        assert_eq!(app.ui_mode, UiMode::DayChanged);

        // Alerts don't hide the day-changed modal
        app.show_alert("hello");
        assert_eq!(app.ui_mode, UiMode::DayChanged);

        app.roll_over("2024-01-02", t0 + secs(120)).unwrap();
        let data = app.ledger.data();
        assert_eq!(data.current_day, "2024-01-02");
        assert_eq!(data.days.len(), 1);
        assert_eq!(data.days[0].date, "2024-01-01");
        assert_eq!(data.days[0].tasks, vec![task("Late", 120)]);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.work.is_idle());
    }
}
