use crate::domain::{format_spent, long_date, AppData, DayView};
use crate::report::stats::{calculate_day_stats, DayStats};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Tasks and breaks recorded for a day key: today's lookup view for the
/// current day, otherwise the history entry
pub fn day_view<'a>(data: &'a AppData, day: &str) -> Option<DayView<'a>> {
    if day == data.current_day {
        return Some(data.current_day_data());
    }
    data.day(day).map(|d| DayView {
        tasks: &d.tasks,
        breaks: &d.breaks,
    })
}

/// Plain-text breakdown for terminal output
pub fn render_text(title: &str, stats: &DayStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", title));
    out.push_str(&format!("  Working time: {}\n", format_spent(stats.total_work)));
    out.push_str(&format!("  Break time:   {}\n\n", format_spent(stats.total_break)));

    if stats.rows.is_empty() {
        out.push_str("  No tasks recorded\n");
        return out;
    }

    let width = stats.rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for row in &stats.rows {
        out.push_str(&format!(
            "  {:<width$}  {}",
            row.name,
            format_spent(row.work_secs),
            width = width
        ));
        if row.break_secs > 0 {
            out.push_str(&format!("  (break {})", format_spent(row.break_secs)));
        }
        out.push('\n');
    }
    out
}

/// Markdown report for one day
pub fn render_markdown(day: &str, stats: &DayStats) -> String {
    let mut report = String::new();

    report.push_str(&format!("# Daily Report - {}\n\n", long_date(day)));

    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Working Time:** {}\n", format_spent(stats.total_work)));
    report.push_str(&format!("- **Break Time:** {}\n", format_spent(stats.total_break)));
    report.push_str(&format!("- **Focus:** {:.1}%\n", stats.focus_percent()));
    report.push_str(&format!("- **Tasks:** {}\n\n", stats.rows.len()));

    report.push_str("## Details by Task\n\n");
    if stats.rows.is_empty() {
        report.push_str("_No tasks recorded_\n");
        return report;
    }

    for row in &stats.rows {
        report.push_str(&format!("- **{}**: {}\n", row.name, format_spent(row.work_secs)));
        if row.break_secs > 0 {
            report.push_str(&format!("  - Break: {}\n", format_spent(row.break_secs)));
        }
    }
    report
}

/// Write the markdown report for `day` and return its path
pub fn generate_report(data: &AppData, day: &str, output: &Path) -> Result<PathBuf> {
    let view = day_view(data, day).with_context(|| format!("No data recorded for {}", day))?;
    let stats = calculate_day_stats(view);

    crate::persistence::atomic_write(output, &render_markdown(day, &stats))?;
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> AppData {
        let mut data = AppData::new("2024-01-02");
        data.add_task_time("Write", 3661);
        data.add_break_time("Write", 300);
        data.add_task_time("Read", 60);
        data.finish_current_day();
        data.current_day = "2024-01-03".to_string();
        data.start_new_day();
        data.add_task_time("Today", 90);
        data
    }

    #[test]
    fn test_day_view_picks_source() {
        let data = sample_data();

        let today = day_view(&data, "2024-01-03").unwrap();
        assert_eq!(today.tasks[0].name, "Today");

        let past = day_view(&data, "2024-01-02").unwrap();
        assert_eq!(past.tasks.len(), 2);

        assert!(day_view(&data, "2023-12-31").is_none());
    }

    #[test]
    fn test_render_text() {
        let data = sample_data();
        let stats = calculate_day_stats(day_view(&data, "2024-01-02").unwrap());
        let text = render_text("Summary", &stats);

        assert!(text.contains("Working time: 1h 2m 1s"));
        assert!(text.contains("Break time:   5m 0s"));
        assert!(text.contains("Write  1h 1m 1s  (break 5m 0s)"));
        assert!(text.contains("Read   1m 0s\n"));
    }

    #[test]
    fn test_render_text_empty() {
        let data = AppData::new("2024-01-01");
        let stats = calculate_day_stats(data.current_day_data());
        assert!(render_text("Summary", &stats).contains("No tasks recorded"));
    }

    #[test]
    fn test_render_markdown() {
        let data = sample_data();
        let stats = calculate_day_stats(day_view(&data, "2024-01-02").unwrap());
        let report = render_markdown("2024-01-02", &stats);

        assert!(report.starts_with("# Daily Report - January 2, 2024\n"));
        assert!(report.contains("- **Working Time:** 1h 2m 1s\n"));
        assert!(report.contains("- **Write**: 1h 1m 1s\n  - Break: 5m 0s\n"));
        assert!(report.contains("- **Read**: 1m 0s\n"));
    }

    #[test]
    fn test_generate_report_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("report.md");
        let data = sample_data();

        let path = generate_report(&data, "2024-01-02", &output).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Details by Task"));

        assert!(generate_report(&data, "1999-01-01", &output).is_err());
    }
}
