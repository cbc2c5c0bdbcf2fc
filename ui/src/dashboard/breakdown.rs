use dioxus::prelude::*;

use crate::{
    core::format,
    dashboard::{DailyMetric, DashboardView},
    t,
};

#[component]
pub fn OperationsBreakdown(view: DashboardView) -> Element {
    let range = view.range_label();

    rsx! {
        article { class: "dashboard-card operations-breakdown",
            div { class: "dashboard-card__header dashboard-card__header--ruled",
                div {
                    h2 { {t!("breakdown-title")} }
                    p { class: "dashboard-card__subtitle", {t!("breakdown-subtitle")} }
                }
                span { class: "dashboard-badge", "{range}" }
            }

            div { class: "operations-breakdown__scroll",
                table { class: "operations-table",
                    thead {
                        tr {
                            th { class: "operations-table__date", {t!("metric-date")} }
                            th { {t!("metric-bookings")} }
                            th { {t!("metric-confirmed")} }
                            th { {t!("metric-pending")} }
                            th { {t!("metric-pickups")} }
                            th { {t!("metric-dropoffs")} }
                            th { class: "operations-table__money", {t!("metric-revenue")} }
                            th { {t!("metric-utilization")} }
                        }
                    }
                    tbody {
                        for day in view.series.records().iter() {
                            {render_breakdown_row(day)}
                        }
                    }
                }
            }
        }
    }
}

fn render_breakdown_row(day: &DailyMetric) -> Element {
    let id = day.id();
    let date = format::format_range_date(day.date);
    let revenue = format::format_currency(day.revenue);
    let utilization = format::format_percent(day.fleet_utilization);

    rsx! {
        tr { key: "{id}",
            td { class: "operations-table__date", "{date}" }
            td { class: "operations-table__strong", "{day.bookings}" }
            td { class: "text-confirmed", "{day.confirmed}" }
            td { class: "text-pending", "{day.pending}" }
            td { "{day.pickups}" }
            td { "{day.dropoffs}" }
            td { class: "operations-table__money", "{revenue}" }
            td { "{utilization}" }
        }
    }
}
