//! Aggregates over a weekly series and the read-only dashboard view model.

use serde::Serialize;

use super::reminders::{reminder_tasks, ReminderTask};
use super::series::{DailyMetric, WeeklySeries};
use crate::core::format;

/// Weekly utilization goal shown next to the average.
pub const UTILIZATION_TARGET: f64 = 0.82;

/// Trend bars never shrink below this share of the track, in percent.
const MIN_BAR_WIDTH_PERCENT: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    /// Largest daily booking count, floored at 1 so bar scaling never divides by zero.
    pub max_bookings: u32,
    pub total_bookings: u64,
    pub total_revenue: u64,
    pub average_utilization: f64,
}

impl WeeklySummary {
    pub fn from_series(series: &WeeklySeries) -> Self {
        let records = series.records();

        let max_bookings = records
            .iter()
            .map(|day| day.bookings)
            .max()
            .unwrap_or(0)
            .max(1);
        let total_bookings = records.iter().map(|day| u64::from(day.bookings)).sum();
        let total_revenue = records.iter().map(|day| day.revenue).sum();
        let average_utilization =
            records.iter().map(|day| day.fleet_utilization).sum::<f64>() / records.len() as f64;

        Self {
            max_bookings,
            total_bookings,
            total_revenue,
            average_utilization,
        }
    }
}

/// Everything the dashboard renders, computed once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub series: WeeklySeries,
    pub summary: WeeklySummary,
    pub today: DailyMetric,
    pub next_day: DailyMetric,
    pub reminders: Vec<ReminderTask>,
}

impl DashboardView {
    /// Width of a day's trend bar as a percentage of the track.
    pub fn bar_width_percent(&self, day: &DailyMetric) -> f64 {
        let share = f64::from(day.bookings) / f64::from(self.summary.max_bookings) * 100.0;
        share.max(MIN_BAR_WIDTH_PERCENT)
    }

    /// `Jun 7 – Jun 13`
    pub fn range_label(&self) -> String {
        format!(
            "{} – {}",
            format::format_range_date(self.series.first().date),
            format::format_range_date(self.series.last().date)
        )
    }

    pub fn window_days(&self) -> usize {
        self.series.len()
    }
}

/// Derives totals, today/tomorrow and the reminder list from `series`.
///
/// Offsets 0 and 1 are always present in a generated series; any other series
/// falls back to its last record for both.
pub fn build_view_model(series: WeeklySeries) -> DashboardView {
    let summary = WeeklySummary::from_series(&series);
    let today = series.find_offset(0).unwrap_or(series.last()).clone();
    let next_day = series.find_offset(1).unwrap_or(series.last()).clone();
    let reminders = reminder_tasks(&format::format_day_label(next_day.date));

    DashboardView {
        series,
        summary,
        today,
        next_day,
        reminders,
    }
}
