use crate::domain::DayView;

/// One task line in a day breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub name: String,
    pub work_secs: u64,
    /// Sum of breaks taken against this task (0 when none)
    pub break_secs: u64,
}

/// Totals and per-task breakdown for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStats {
    pub total_work: u64,
    pub total_break: u64,
    pub rows: Vec<TaskRow>,
}

impl DayStats {
    /// Share of tracked time spent working, 0-100
    pub fn focus_percent(&self) -> f64 {
        let total = self.total_work.saturating_add(self.total_break);
        if total == 0 {
            return 0.0;
        }
        self.total_work as f64 / total as f64 * 100.0
    }
}

/// Calculate totals for a day's tasks and breaks.
///
/// Breaks without a matching task still count toward the break total.
pub fn calculate_day_stats(view: DayView<'_>) -> DayStats {
    let total_work = saturating_total(view.tasks.iter().map(|t| t.time_spent));
    let total_break = saturating_total(view.breaks.iter().map(|b| b.time_spent));

    let rows = view
        .tasks
        .iter()
        .map(|task| TaskRow {
            name: task.name.clone(),
            work_secs: task.time_spent,
            break_secs: saturating_total(
                view.breaks
                    .iter()
                    .filter(|b| b.task_name == task.name)
                    .map(|b| b.time_spent),
            ),
        })
        .collect();

    DayStats {
        total_work,
        total_break,
        rows,
    }
}

/// Sum that sticks at `u64::MAX` like the bucket accumulation does
fn saturating_total(seconds: impl Iterator<Item = u64>) -> u64 {
    seconds.fold(0, u64::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Break, Task};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_calculate_day_stats() {
        let tasks = vec![
            Task {
                name: "Write".to_string(),
                time_spent: 3000,
            },
            Task {
                name: "Read".to_string(),
                time_spent: 600,
            },
        ];
        let breaks = vec![
            Break {
                task_name: "Write".to_string(),
                time_spent: 300,
            },
            Break {
                task_name: "Gone".to_string(),
                time_spent: 60,
            },
        ];

        let stats = calculate_day_stats(DayView {
            tasks: &tasks,
            breaks: &breaks,
        });

        assert_eq!(stats.total_work, 3600);
        assert_eq!(stats.total_break, 360);
        assert_eq!(
            stats.rows,
            vec![
                TaskRow {
                    name: "Write".to_string(),
                    work_secs: 3000,
                    break_secs: 300,
                },
                TaskRow {
                    name: "Read".to_string(),
                    work_secs: 600,
                    break_secs: 0,
                },
            ]
        );
        assert!((stats.focus_percent() - 90.909).abs() < 0.01);
    }

    #[test]
    fn test_empty_day() {
        let stats = calculate_day_stats(DayView {
            tasks: &[],
            breaks: &[],
        });
        assert!(stats.rows.is_empty());
        assert_eq!(stats.focus_percent(), 0.0);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let tasks = vec![
            Task {
                name: "A".to_string(),
                time_spent: u64::MAX,
            },
            Task {
                name: "B".to_string(),
                time_spent: 1,
            },
        ];
        let breaks = vec![
            Break {
                task_name: "A".to_string(),
                time_spent: u64::MAX,
            },
            Break {
                task_name: "A".to_string(),
                time_spent: 5,
            },
        ];

        let stats = calculate_day_stats(DayView {
            tasks: &tasks,
            breaks: &breaks,
        });

        assert_eq!(stats.total_work, u64::MAX);
        assert_eq!(stats.total_break, u64::MAX);
        assert_eq!(stats.rows[0].break_secs, u64::MAX);
        assert!((stats.focus_percent() - 100.0).abs() < 0.01);
    }
}
