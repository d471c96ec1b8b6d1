use crate::domain::{format_clock, Countdown, TimerKind, TimerStatus};
use crate::ui::styles::{
    border_style, clock_style, idle_style, muted_style, paused_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

/// Status badge text and style for a countdown
pub fn status_badge(status: TimerStatus) -> (&'static str, ratatui::style::Style) {
    match status {
        TimerStatus::Running => ("▶ RUNNING", running_style()),
        TimerStatus::Paused => ("⏸ PAUSED", paused_style()),
        TimerStatus::Idle => ("■ READY", idle_style()),
    }
}

/// Pane title: the work pane shows the task being typed, the break pane the
/// task the break belongs to
pub fn pane_title(kind: TimerKind, task: &str) -> String {
    match (kind, task.is_empty()) {
        (_, true) => format!(" {} ", kind.label()),
        (TimerKind::Work, false) => format!(" {}: {} ", kind.label(), task),
        (TimerKind::Break, false) => format!(" {} from: {} ", kind.label(), task),
    }
}

/// Render one countdown with its clock, status and progress gauge
pub fn render_timer_pane(
    f: &mut Frame,
    area: Rect,
    timer: &Countdown,
    task: &str,
    hint: &str,
    gauge_style: ratatui::style::Style,
    now: Instant,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(pane_title(timer.kind, task), title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Clock + status
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let (badge, badge_style) = status_badge(timer.status);
    let lines = vec![
        Line::raw(""),
        Line::styled(format_clock(timer.remaining_secs(now)), clock_style()),
        Line::raw(""),
        Line::from(vec![
            Span::styled(badge, badge_style),
            Span::styled(format!("   {} min", timer.minutes), muted_style()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style)
        .ratio(timer.progress(now).clamp(0.0, 1.0))
        .label(format!("{:.0}%", timer.progress(now) * 100.0));
    f.render_widget(gauge, rows[1]);

    f.render_widget(
        Paragraph::new(Line::styled(hint.to_string(), muted_style())).alignment(Alignment::Center),
        rows[2],
    );
}

/// Hint line under the break timer
pub fn break_hint(current_task: &str) -> &'static str {
    if current_task.is_empty() {
        "Start a task first"
    } else {
        "b start/pause   R reset   [/] minutes"
    }
}
