mod series;
pub use series::{generate_series, generate_series_for, DailyMetric, WeeklySeries};

mod reminders;
pub use reminders::{reminder_tasks, ReminderStatus, ReminderTask};

mod summary;
pub use summary::{build_view_model, DashboardView, WeeklySummary, UTILIZATION_TARGET};

mod headline;
pub use headline::DashboardHeadline;

mod trend;
pub use trend::BookingTrend;

mod breakdown;
pub use breakdown::OperationsBreakdown;

mod next_day;
pub use next_day::NextDayReminders;
