/// Which bucket a countdown credits its time to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Work,
    Break,
}

impl TimerKind {
    /// Allowed length range in minutes
    pub fn minute_range(&self) -> (u64, u64) {
        match self {
            Self::Work => (1, 120),
            Self::Break => (1, 60),
        }
    }

    pub fn clamp_minutes(&self, minutes: u64) -> u64 {
        let (min, max) = self.minute_range();
        minutes.clamp(min, max)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }
}

/// Top-level screen shown by the terminal app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Timer,
    Summary,
    History,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingTaskName,
    Alert,
    DayChanged, // Shown when midnight has passed while running
}
