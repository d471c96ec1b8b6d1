pub mod generator;
pub mod stats;

pub use generator::{day_view, generate_report, render_text};
pub use stats::{calculate_day_stats, DayStats};
