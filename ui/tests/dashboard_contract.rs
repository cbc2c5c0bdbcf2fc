//! Public contract of the dashboard series and view model.

use time::macros::{date, datetime};
use time::{Date, Duration};
use ui::core::format;
use ui::dashboard::{
    build_view_model, generate_series, generate_series_for, DailyMetric, ReminderStatus,
    WeeklySeries,
};

#[test]
fn series_offsets_follow_any_reference_date() {
    for anchor in [
        date!(2024 - 01 - 01),
        date!(2024 - 06 - 10),
        date!(2024 - 12 - 30),
        date!(1999 - 03 - 01),
    ] {
        let series = generate_series_for(anchor);
        assert_eq!(series.len(), 7);

        let deltas: Vec<i64> = series
            .records()
            .iter()
            .map(|day| (day.date - anchor).whole_days())
            .collect();
        assert_eq!(deltas, vec![-3, -2, -1, 0, 1, 2, 3], "anchor {anchor}");
    }
}

#[test]
fn monday_reference_selects_monday_and_tuesday() {
    let view = build_view_model(generate_series(datetime!(2024-06-10 14:22 UTC)));

    assert_eq!(view.today.date, date!(2024 - 06 - 10));
    assert_eq!(view.next_day.date, date!(2024 - 06 - 11));
    assert_eq!(format::format_headline_date(view.today.date), "Monday, June 10");
    assert_eq!(view.range_label(), "Jun 7 – Jun 13");
}

#[test]
fn weekly_totals_for_the_blueprint() {
    let view = build_view_model(generate_series_for(date!(2024 - 06 - 10)));

    assert_eq!(view.summary.total_bookings, 147);
    assert_eq!(view.summary.total_revenue, 70_740);
    assert_eq!(format::format_compact_currency(view.summary.total_revenue), "$71K");
    assert_eq!(format::format_percent(view.summary.average_utilization), "80%");
    assert_eq!(format::format_percent(view.today.fleet_utilization), "88%");
    assert_eq!(format::format_currency(view.next_day.revenue), "$10,240");
}

#[test]
fn reminders_reference_the_next_day_label() {
    let view = build_view_model(generate_series_for(date!(2024 - 06 - 10)));
    let label = format::format_day_label(view.next_day.date);
    assert_eq!(label, "Tue, Jun 11");

    let olivia = view
        .reminders
        .iter()
        .find(|task| task.customer == "Olivia Carter")
        .expect("Olivia Carter reminder");
    assert!(olivia.note.as_deref().unwrap_or_default().contains(&label));

    let attention: Vec<&str> = view
        .reminders
        .iter()
        .filter(|task| task.status == ReminderStatus::Attention)
        .map(|task| task.vehicle.as_str())
        .collect();
    assert_eq!(attention, vec!["Ford Transit"]);
}

#[test]
fn month_boundaries_carry_into_labels() {
    let view = build_view_model(generate_series_for(date!(2024 - 12 - 31)));
    assert_eq!(view.next_day.date, date!(2025 - 01 - 01));
    assert_eq!(format::format_day_label(view.next_day.date), "Wed, Jan 1");
    assert_eq!(view.range_label(), "Dec 28 – Jan 3");
}

#[test]
fn sparse_series_keeps_a_positive_scale() {
    let lone = DailyMetric {
        day_offset: 5,
        date: Date::MIN + Duration::days(5),
        bookings: 0,
        confirmed: 0,
        pending: 0,
        pickups: 0,
        dropoffs: 0,
        revenue: 0,
        fleet_utilization: 0.0,
        overdue: 0,
        new_customers: 0,
    };
    let view = build_view_model(WeeklySeries::from_records(vec![lone.clone()]).expect("one record"));

    assert_eq!(view.summary.max_bookings, 1);
    assert_eq!(view.today, lone);
    assert_eq!(view.next_day, lone);
    assert_eq!(view.bar_width_percent(&lone), 6.0);
}
