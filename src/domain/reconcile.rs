use super::record::{merge_buckets, AppData, DayData};

/// What reconciliation did to the stored record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was stored yet
    Fresh,
    /// The stored record could not be parsed and was replaced
    Corrupt(String),
    /// Stored day matches today
    Unchanged,
    /// Day changed with empty buffers; only `current_day` moved
    Advanced { from: String },
    /// Buffers were folded into an existing history entry for the old day
    Merged { into: String },
    /// Buffers became a new history entry for the old day
    Appended { date: String },
}

impl Outcome {
    /// Whether the reconciled record has to be written back
    pub fn needs_write(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct Reconciled {
    pub data: AppData,
    pub outcome: Outcome,
}

/// Bring a raw stored record up to date with `today`.
///
/// Pure: the caller decides whether to persist based on the outcome.
pub fn reconcile(raw: Option<&str>, today: &str) -> Reconciled {
    let Some(raw) = raw else {
        return Reconciled {
            data: AppData::new(today),
            outcome: Outcome::Fresh,
        };
    };

    match serde_json::from_str::<AppData>(raw) {
        Ok(data) => roll_forward(data, today),
        Err(e) => Reconciled {
            data: AppData::new(today),
            outcome: Outcome::Corrupt(e.to_string()),
        },
    }
}

/// Fold leftover buffers into history when the stored day is not today.
///
/// Any inequality counts as a new day, including a clock that went backwards.
pub fn roll_forward(mut data: AppData, today: &str) -> Reconciled {
    if data.current_day == today {
        return Reconciled {
            data,
            outcome: Outcome::Unchanged,
        };
    }

    let old_day = std::mem::replace(&mut data.current_day, today.to_string());
    let tasks = std::mem::take(&mut data.current_tasks);
    let breaks = std::mem::take(&mut data.current_breaks);

    let outcome = if tasks.is_empty() && breaks.is_empty() {
        Outcome::Advanced { from: old_day }
    } else if let Some(idx) = data.day_index(&old_day) {
        let day = &mut data.days[idx];
        merge_buckets(&mut day.tasks, tasks);
        merge_buckets(&mut day.breaks, breaks);
        Outcome::Merged { into: old_day }
    } else {
        data.days.push(DayData {
            date: old_day.clone(),
            tasks,
            breaks,
        });
        Outcome::Appended { date: old_day }
    };

    Reconciled { data, outcome }
}
