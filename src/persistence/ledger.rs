use super::store::{KeyValueStore, StoreError, STORAGE_KEY};
use crate::domain::{reconcile, AppData, DayView, Outcome};
use tracing::{debug, info, warn};

/// The app record bound to the store it is persisted in.
///
/// Every mutation goes through the pure transitions on [`AppData`] and is
/// then written back in full.
pub struct Ledger<S: KeyValueStore> {
    store: S,
    data: AppData,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Read the stored record and reconcile it against `today`
    pub fn load(store: S, today: &str) -> Result<Self, StoreError> {
        let mut ledger = Self {
            store,
            data: AppData::new(today),
        };
        ledger.reload(today)?;
        Ok(ledger)
    }

    /// Re-read the store and run reconciliation again (e.g. after midnight)
    pub fn reload(&mut self, today: &str) -> Result<Outcome, StoreError> {
        let raw = self.store.get(STORAGE_KEY)?;
        let reconciled = reconcile(raw.as_deref(), today);
        self.data = reconciled.data;

        match &reconciled.outcome {
            Outcome::Fresh => info!(today, "no stored record, starting fresh"),
            Outcome::Corrupt(error) => {
                warn!(%error, "stored record could not be parsed, starting fresh")
            }
            Outcome::Unchanged => debug!(today, "stored record is current"),
            Outcome::Advanced { from } => info!(from = %from, today, "advanced to new day"),
            Outcome::Merged { into } => {
                info!(into = %into, today, "merged leftover time into history")
            }
            Outcome::Appended { date } => {
                info!(date = %date, today, "moved leftover time into history")
            }
        }

        if reconciled.outcome.needs_write() {
            self.persist()?;
        }
        Ok(reconciled.outcome)
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_task_time(&mut self, task_name: &str, seconds: u64) -> Result<(), StoreError> {
        self.data.add_task_time(task_name, seconds);
        debug!(task = task_name, seconds, "credited work time");
        self.persist()
    }

    pub fn add_break_time(&mut self, task_name: &str, seconds: u64) -> Result<(), StoreError> {
        self.data.add_break_time(task_name, seconds);
        debug!(task = task_name, seconds, "credited break time");
        self.persist()
    }

    /// Write the buffers into history (replacing any same-day entry).
    /// Returns false without writing when there is nothing to finish.
    pub fn finish_current_day(&mut self) -> Result<bool, StoreError> {
        if !self.data.finish_current_day() {
            return Ok(false);
        }
        info!(day = %self.data.current_day, "finished day");
        self.persist()?;
        Ok(true)
    }

    /// Interactive end of day: drop any earlier snapshot of today, then finish
    pub fn end_day(&mut self) -> Result<bool, StoreError> {
        if self.data.buffers_empty() {
            return Ok(false);
        }
        let day = self.data.current_day.clone();
        if self.data.remove_day(&day).is_some() {
            debug!(day = %day, "replacing earlier snapshot of today");
        }
        self.finish_current_day()
    }

    /// Clear today's buffers
    pub fn start_new_day(&mut self) -> Result<(), StoreError> {
        self.data.start_new_day();
        info!(day = %self.data.current_day, "started new day");
        self.persist()
    }

    pub fn current_day_data(&self) -> DayView<'_> {
        self.data.current_day_data()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.data)?;
        self.store.set(STORAGE_KEY, &json)?;
        debug!(bytes = json.len(), "persisted record");
        Ok(())
    }
}
