use dioxus::prelude::*;

use crate::{
    core::format,
    dashboard::{DashboardView, UTILIZATION_TARGET},
    t,
};

#[component]
pub fn DashboardHeadline(view: DashboardView) -> Element {
    let live_as_of = t!(
        "headline-live-as-of",
        date = format::format_headline_date(view.today.date)
    );

    let stats = [
        StatCard {
            label: t!("stat-bookings-label"),
            value: view.summary.total_bookings.to_string(),
            meta: t!("stat-bookings-meta", days = view.window_days().to_string()),
        },
        StatCard {
            label: t!("stat-utilization-label"),
            value: format::format_percent(view.summary.average_utilization),
            meta: t!(
                "stat-utilization-meta",
                target = format::format_percent(UTILIZATION_TARGET)
            ),
        },
        StatCard {
            label: t!("stat-pickups-label"),
            value: view.today.pickups.to_string(),
            meta: t!("stat-pickups-meta", pending = view.today.pending.to_string()),
        },
        StatCard {
            label: t!("stat-revenue-label"),
            value: format::format_compact_currency(view.summary.total_revenue),
            meta: t!(
                "stat-revenue-meta",
                amount = format::format_currency(view.next_day.revenue),
                day = format::format_day_label(view.next_day.date)
            ),
        },
    ];

    rsx! {
        header { class: "dashboard-card dashboard-headline",
            div { class: "dashboard-headline__top",
                div {
                    h1 { class: "dashboard-headline__title", {t!("app-title")} }
                    p { class: "dashboard-headline__tagline", {t!("app-tagline")} }
                }
                div { class: "dashboard-headline__live",
                    span { class: "dashboard-headline__pulse", aria_hidden: "true" }
                    "{live_as_of}"
                }
            }

            dl { class: "dashboard-stats",
                for stat in stats.into_iter() {
                    div { key: "{stat.label}", class: "dashboard-stat",
                        dt { class: "dashboard-stat__label", "{stat.label}" }
                        dd { class: "dashboard-stat__value", "{stat.value}" }
                        p { class: "dashboard-stat__meta", "{stat.meta}" }
                    }
                }
            }
        }
    }
}

struct StatCard {
    label: String,
    value: String,
    meta: String,
}
