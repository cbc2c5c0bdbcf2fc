use dioxus::prelude::*;

use crate::{
    core::format,
    dashboard::{DailyMetric, DashboardView},
    t,
};

/// Horizontal bar per day, scaled against the busiest day of the week.
#[component]
pub fn BookingTrend(view: DashboardView) -> Element {
    let rows: Vec<TrendRow> = view
        .series
        .records()
        .iter()
        .map(|day| TrendRow::new(day, view.bar_width_percent(day)))
        .collect();

    rsx! {
        article { class: "dashboard-card booking-trend",
            header { class: "dashboard-card__header",
                div {
                    h2 { {t!("trend-title")} }
                    p { class: "dashboard-card__subtitle", {t!("trend-subtitle")} }
                }
                // Static range toggle; only the seven-day window exists.
                div { class: "booking-trend__ranges",
                    button {
                        r#type: "button",
                        class: "range-chip range-chip--active",
                        {t!("trend-range-week")}
                    }
                    button {
                        r#type: "button",
                        class: "range-chip",
                        {t!("trend-range-fortnight")}
                    }
                }
            }

            div { class: "booking-trend__rows",
                for row in rows.into_iter() {
                    {render_trend_row(row)}
                }
            }
        }
    }
}

struct TrendRow {
    id: String,
    day_label: String,
    bar_width: String,
    bookings: u32,
    confirmed: u32,
    pending: u32,
    dropoffs: u32,
    utilization: String,
}

impl TrendRow {
    fn new(day: &DailyMetric, bar_width_percent: f64) -> Self {
        Self {
            id: day.id(),
            day_label: format::format_day_label(day.date),
            bar_width: format!("{bar_width_percent:.2}"),
            bookings: day.bookings,
            confirmed: day.confirmed,
            pending: day.pending,
            dropoffs: day.dropoffs,
            utilization: format::format_percent(day.fleet_utilization),
        }
    }
}

fn render_trend_row(row: TrendRow) -> Element {
    let TrendRow {
        id,
        day_label,
        bar_width,
        bookings,
        confirmed,
        pending,
        dropoffs,
        utilization,
    } = row;

    rsx! {
        div { key: "{id}", class: "booking-trend__row",
            div { class: "booking-trend__day", "{day_label}" }
            div { class: "booking-trend__body",
                div { class: "booking-trend__bar-line",
                    div { class: "booking-trend__track",
                        div {
                            class: "booking-trend__bar",
                            style: "width: {bar_width}%",
                        }
                    }
                    span { class: "booking-trend__count", "{bookings}" }
                }
                div { class: "booking-trend__chips",
                    span {
                        {t!("metric-confirmed")}
                        " "
                        strong { "{confirmed}" }
                    }
                    span {
                        {t!("metric-pending")}
                        " "
                        strong { class: "text-pending", "{pending}" }
                    }
                    span {
                        {t!("metric-dropoffs")}
                        " "
                        strong { "{dropoffs}" }
                    }
                    span {
                        {t!("metric-utilization")}
                        " "
                        strong { "{utilization}" }
                    }
                }
            }
        }
    }
}
