pub mod day_pane;
pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::{long_date, UiMode, View};
use crate::persistence::KeyValueStore;
use crate::report::calculate_day_stats;
use day_pane::render_day_pane;
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::{create_layout, create_timer_layout};
use modal::{render_alert_modal, render_day_changed_modal};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;
use styles::{border_style, break_gauge_style, muted_style, title_style, work_gauge_style};
use timer_pane::{break_hint, render_timer_pane};

/// Main render function - draws the entire UI
pub fn render<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, now: Instant) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area, app.view, app.has_history());
    render_header(f, app, layout.header_area);

    match app.view {
        View::Timer => render_timer_view(f, app, layout.body_area, now),
        View::Summary => {
            let stats = calculate_day_stats(app.ledger.current_day_data());
            render_day_pane(f, layout.body_area, "Summary of the Day", &stats);
        }
        View::History => render_history_pane(f, app, layout.body_area),
    }

    // Day changed modal takes precedence
    if app.ui_mode == UiMode::DayChanged {
        render_day_changed_modal(f, app, size);
        return;
    }

    render_input_form(f, app, size);
    render_alert_modal(f, app, size);
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("Optimus Time", title_style()),
        Span::styled(
            format!("  ·  {}", long_date(&app.ledger.data().current_day)),
            muted_style(),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(border_style()));

    f.render_widget(header, area);
}

fn render_timer_view<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect, now: Instant) {
    let timer_layout = create_timer_layout(area);

    // A running interval keeps the name it was started with
    let work_task = if app.work.is_idle() {
        &app.task_name
    } else {
        &app.work_task
    };
    render_timer_pane(
        f,
        timer_layout.work_area,
        &app.work,
        work_task,
        "Enter start/pause   r reset   +/- minutes",
        work_gauge_style(),
        now,
    );

    let break_task = if app.rest.is_idle() {
        &app.current_task
    } else {
        &app.break_task
    };
    render_timer_pane(
        f,
        timer_layout.break_area,
        &app.rest,
        break_task,
        break_hint(&app.current_task),
        break_gauge_style(),
        now,
    );

    let stats = calculate_day_stats(app.ledger.current_day_data());
    render_day_pane(f, timer_layout.today_area, "Today", &stats);
}
