use crate::app::AppState;
use crate::domain::{today_key, UiMode, View};
use crate::persistence::KeyValueStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::DayChanged => handle_day_changed_mode(app, key),
        UiMode::Alert => handle_alert_mode(app, key),
        UiMode::EditingTaskName => handle_name_input_mode(app, key),
        UiMode::Normal => match app.view {
            View::Timer => handle_timer_view(app, key),
            View::Summary => handle_summary_view(app, key),
            View::History => handle_history_view(app, key),
        },
    }
}

/// Handle keys on the timer screen
fn handle_timer_view<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    let now = Instant::now();

    match key.code {
        // Task name
        KeyCode::Char('a') | KeyCode::Char('t') => app.start_edit_task_name(),

        // Work timer
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_work(now),
        KeyCode::Char('r') => app.reset_work(now)?,
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_work_minutes(1),
        KeyCode::Char('-') | KeyCode::Char('_') => app.adjust_work_minutes(-1),

        // Break timer
        KeyCode::Char('b') | KeyCode::Char('B') => app.toggle_break(now),
        KeyCode::Char('R') => app.reset_break(now)?,
        KeyCode::Char(']') => app.adjust_break_minutes(1),
        KeyCode::Char('[') => app.adjust_break_minutes(-1),

        // Day actions
        KeyCode::Char('e') | KeyCode::Char('E') => app.end_day()?,
        KeyCode::Char('h') | KeyCode::Char('H') => app.open_history(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

/// Handle keys on the end-of-day summary
fn handle_summary_view<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => app.new_day()?,
        KeyCode::Char('h') | KeyCode::Char('H') => app.open_history(),
        KeyCode::Esc => app.back_to_timer(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the history browser
fn handle_history_view<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Older days sit further down / right in the list
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.history_next(),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.history_prev(),
        KeyCode::Esc | KeyCode::Backspace => app.back_to_timer(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while typing the task name
fn handle_name_input_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_name(),
        KeyCode::Esc => app.cancel_task_name(),
        KeyCode::Backspace => app.name_input_backspace(),
        KeyCode::Char(c) => app.name_input_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while an alert is shown
fn handle_alert_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
    Ok(false)
}

/// Handle keys after midnight has passed: roll over or quit
fn handle_day_changed_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            app.roll_over(&today_key(), Instant::now())?;
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),
        _ => Ok(false),
    }
}
