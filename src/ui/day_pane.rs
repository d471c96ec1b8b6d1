use crate::domain::format_spent;
use crate::report::DayStats;
use crate::ui::styles::{border_style, default_style, muted_style, time_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines for a day's totals followed by the per-task breakdown
pub fn day_lines(stats: &DayStats) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Working time  ", muted_style()),
            Span::styled(format_spent(stats.total_work), time_style()),
        ]),
        Line::from(vec![
            Span::styled("  Break time    ", muted_style()),
            Span::styled(format_spent(stats.total_break), time_style()),
        ]),
        Line::raw(""),
        Line::styled("  Details by Task", title_style()),
        Line::raw(""),
    ];

    if stats.rows.is_empty() {
        lines.push(Line::styled("  No tasks recorded", muted_style()));
        return lines;
    }

    for row in &stats.rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", row.name), default_style()),
            Span::styled(format_spent(row.work_secs), time_style()),
        ]));
        if row.break_secs > 0 {
            lines.push(Line::styled(
                format!("    Break: {}", format_spent(row.break_secs)),
                muted_style(),
            ));
        }
    }
    lines
}

/// Render a bordered pane with a day's breakdown
pub fn render_day_pane(f: &mut Frame, area: Rect, title: &str, stats: &DayStats) {
    let paragraph = Paragraph::new(day_lines(stats))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(format!(" {} ", title), title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
