use dioxus::prelude::*;

use crate::core::clock;
use crate::dashboard::{
    build_view_model, generate_series, BookingTrend, DashboardHeadline, NextDayReminders,
    OperationsBreakdown,
};

#[cfg(debug_assertions)]
fn log_dashboard_render(view: &crate::dashboard::DashboardView) {
    // Lightweight render trace; the summary is small enough to dump whole.
    let summary = serde_json::to_string(&view.summary).unwrap_or_default();
    tracing::debug!(today = %view.today.date, %summary, "dashboard render");
}

#[component]
pub fn Dashboard() -> Element {
    crate::i18n::init();

    // Recomputed on every render from the wall clock; nothing is cached.
    let view = build_view_model(generate_series(clock::reference_now()));

    #[cfg(debug_assertions)]
    {
        log_dashboard_render(&view);
    }

    rsx! {
        main { class: "page page-dashboard",
            DashboardHeadline { view: view.clone() }

            section { class: "dashboard__grid",
                div { class: "dashboard__main",
                    BookingTrend { view: view.clone() }
                    OperationsBreakdown { view: view.clone() }
                }
                NextDayReminders { view }
            }
        }
    }
}
