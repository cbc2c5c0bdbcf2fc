//! Dated daily metrics derived from the weekly blueprint.

use serde::Serialize;
use time::{Date, Duration, OffsetDateTime};

/// One calendar day's operational snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMetric {
    /// Signed day displacement from the anchor date.
    pub day_offset: i64,
    pub date: Date,
    pub bookings: u32,
    pub confirmed: u32,
    pub pending: u32,
    pub pickups: u32,
    pub dropoffs: u32,
    /// Whole US dollars.
    pub revenue: u64,
    /// Fraction of the fleet rented out, in `[0, 1]`.
    pub fleet_utilization: f64,
    pub overdue: u32,
    pub new_customers: u32,
}

impl DailyMetric {
    /// Stable row key (`YYYY-MM-DD`).
    pub fn id(&self) -> String {
        self.date.to_string()
    }
}

/// Undated seed row; `day_offset` is resolved against an anchor date.
struct Blueprint {
    day_offset: i64,
    bookings: u32,
    confirmed: u32,
    pending: u32,
    pickups: u32,
    dropoffs: u32,
    revenue: u64,
    fleet_utilization: f64,
    overdue: u32,
    new_customers: u32,
}

impl Blueprint {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        day_offset: i64,
        bookings: u32,
        confirmed: u32,
        pending: u32,
        pickups: u32,
        dropoffs: u32,
        revenue: u64,
        fleet_utilization: f64,
        overdue: u32,
        new_customers: u32,
    ) -> Self {
        Self {
            day_offset,
            bookings,
            confirmed,
            pending,
            pickups,
            dropoffs,
            revenue,
            fleet_utilization,
            overdue,
            new_customers,
        }
    }

    fn resolve(&self, anchor: Date) -> DailyMetric {
        DailyMetric {
            day_offset: self.day_offset,
            date: anchor.saturating_add(Duration::days(self.day_offset)),
            bookings: self.bookings,
            confirmed: self.confirmed,
            pending: self.pending,
            pickups: self.pickups,
            dropoffs: self.dropoffs,
            revenue: self.revenue,
            fleet_utilization: self.fleet_utilization,
            overdue: self.overdue,
            new_customers: self.new_customers,
        }
    }
}

#[rustfmt::skip]
const BLUEPRINT: [Blueprint; 7] = [
    //             offset bk  conf pend pick drop  revenue  util  over new
    Blueprint::new(-3,    21, 19,  1,   10,  11,    9_450, 0.80, 1,   4),
    Blueprint::new(-2,    18, 16,  2,    9,   8,    8_640, 0.74, 2,   3),
    Blueprint::new(-1,    24, 22,  1,   13,  10,   11_820, 0.86, 0,   6),
    Blueprint::new( 0,    27, 24,  2,   14,  12,   13_150, 0.88, 1,   7),
    Blueprint::new( 1,    22, 19,  3,   12,  10,   10_240, 0.83, 1,   5),
    Blueprint::new( 2,    19, 17,  2,    9,  11,    9_320, 0.79, 2,   3),
    Blueprint::new( 3,    16, 14,  2,    8,   9,    8_120, 0.71, 1,   2),
];

/// Chronologically ordered, non-empty run of daily metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySeries {
    records: Vec<DailyMetric>,
}

impl WeeklySeries {
    /// Sorts `records` by date. Returns `None` for an empty list.
    pub fn from_records(mut records: Vec<DailyMetric>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        records.sort_by_key(|record| record.date);
        Some(Self { records })
    }

    pub fn records(&self) -> &[DailyMetric] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> &DailyMetric {
        &self.records[0]
    }

    pub fn last(&self) -> &DailyMetric {
        &self.records[self.records.len() - 1]
    }

    pub fn find_offset(&self, day_offset: i64) -> Option<&DailyMetric> {
        self.records.iter().find(|r| r.day_offset == day_offset)
    }
}

/// Builds the seven-day series around the calendar date of `reference`.
///
/// The anchor is the date in the instant's own offset, so callers pass a local
/// timestamp to get the local calendar day.
pub fn generate_series(reference: OffsetDateTime) -> WeeklySeries {
    generate_series_for(reference.date())
}

/// Builds the seven-day series around `anchor`.
pub fn generate_series_for(anchor: Date) -> WeeklySeries {
    let mut records: Vec<DailyMetric> = BLUEPRINT.iter().map(|bp| bp.resolve(anchor)).collect();
    records.sort_by_key(|record| record.date);
    WeeklySeries { records }
}
