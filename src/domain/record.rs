use serde::{Deserialize, Serialize};

/// Work time accumulated against a named task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    pub time_spent: u64,
}

/// Break time taken while working on a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Break {
    pub task_name: String,
    pub time_spent: u64,
}

/// One finished day in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayData {
    /// Local date as YYYY-MM-DD
    pub date: String,
    pub tasks: Vec<Task>,
    pub breaks: Vec<Break>,
}

/// The single persisted record: history plus the buffers for the current day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub current_day: String,
    pub days: Vec<DayData>,
    pub current_tasks: Vec<Task>,
    pub current_breaks: Vec<Break>,
}

/// Borrowed tasks and breaks for whatever counts as "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayView<'a> {
    pub tasks: &'a [Task],
    pub breaks: &'a [Break],
}

impl DayView<'_> {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.breaks.is_empty()
    }
}

/// Something keyed by a name that accumulates seconds
pub trait Bucket {
    fn key(&self) -> &str;
    fn seconds_mut(&mut self) -> &mut u64;
}

impl Bucket for Task {
    fn key(&self) -> &str {
        &self.name
    }

    fn seconds_mut(&mut self) -> &mut u64 {
        &mut self.time_spent
    }
}

impl Bucket for Break {
    fn key(&self) -> &str {
        &self.task_name
    }

    fn seconds_mut(&mut self) -> &mut u64 {
        &mut self.time_spent
    }
}

/// Fold `incoming` into `target` by key: matching buckets add their seconds,
/// unknown ones are appended in order
pub fn merge_buckets<B: Bucket>(target: &mut Vec<B>, incoming: Vec<B>) {
    for mut bucket in incoming {
        match target.iter_mut().find(|b| b.key() == bucket.key()) {
            Some(existing) => {
                let add = *bucket.seconds_mut();
                let total = existing.seconds_mut();
                *total = total.saturating_add(add);
            }
            None => target.push(bucket),
        }
    }
}

impl AppData {
    /// A fresh record for the given day with empty history
    pub fn new(today: &str) -> Self {
        Self {
            current_day: today.to_string(),
            days: Vec::new(),
            current_tasks: Vec::new(),
            current_breaks: Vec::new(),
        }
    }

    /// True when neither current-day buffer holds anything
    pub fn buffers_empty(&self) -> bool {
        self.current_tasks.is_empty() && self.current_breaks.is_empty()
    }

    pub fn day_index(&self, date: &str) -> Option<usize> {
        self.days.iter().position(|d| d.date == date)
    }

    pub fn day(&self, date: &str) -> Option<&DayData> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Credit work seconds to a task in the current buffers
    pub fn add_task_time(&mut self, task_name: &str, seconds: u64) {
        merge_buckets(
            &mut self.current_tasks,
            vec![Task {
                name: task_name.to_string(),
                time_spent: seconds,
            }],
        );
    }

    /// Credit break seconds to a task in the current buffers
    pub fn add_break_time(&mut self, task_name: &str, seconds: u64) {
        merge_buckets(
            &mut self.current_breaks,
            vec![Break {
                task_name: task_name.to_string(),
                time_spent: seconds,
            }],
        );
    }

    /// Write the current buffers into history for `current_day`.
    ///
    /// An existing entry for the same date is replaced, not merged.
    /// Returns false (and changes nothing) when both buffers are empty.
    pub fn finish_current_day(&mut self) -> bool {
        if self.buffers_empty() {
            return false;
        }

        let day = DayData {
            date: self.current_day.clone(),
            tasks: self.current_tasks.clone(),
            breaks: self.current_breaks.clone(),
        };

        match self.day_index(&self.current_day) {
            Some(idx) => self.days[idx] = day,
            None => self.days.push(day),
        }
        true
    }

    /// Clear the current-day buffers. `current_day` and history stay as they are.
    pub fn start_new_day(&mut self) {
        self.current_tasks.clear();
        self.current_breaks.clear();
    }

    /// Remove the history entry for a date, if any
    pub fn remove_day(&mut self, date: &str) -> Option<DayData> {
        let idx = self.day_index(date)?;
        Some(self.days.remove(idx))
    }

    /// Tasks and breaks representing today: the finished history entry for
    /// `current_day` when one exists, otherwise the live buffers
    pub fn current_day_data(&self) -> DayView<'_> {
        match self.day(&self.current_day) {
            Some(day) => DayView {
                tasks: &day.tasks,
                breaks: &day.breaks,
            },
            None => DayView {
                tasks: &self.current_tasks,
                breaks: &self.current_breaks,
            },
        }
    }

    /// History sorted newest first
    pub fn days_newest_first(&self) -> Vec<&DayData> {
        let mut days: Vec<&DayData> = self.days.iter().collect();
        days.sort_by(|a, b| b.date.cmp(&a.date));
        days
    }
}
