pub mod clock;
pub mod enums;
pub mod format;
pub mod reconcile;
pub mod record;
pub mod timer;

pub use clock::{day_key, long_date, parse_day_key, today_key};
pub use enums::{TimerKind, UiMode, View};
pub use format::{format_clock, format_spent, parse_duration};
pub use reconcile::{reconcile, Outcome};
pub use record::{AppData, DayData, DayView};
pub use timer::{Countdown, TimerStatus};
