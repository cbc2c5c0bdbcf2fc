use dioxus::prelude::*;

use crate::{
    core::format,
    dashboard::{DashboardView, ReminderTask},
    t,
};

/// Tomorrow's logistics summary and the preparation checklist.
#[component]
pub fn NextDayReminders(view: DashboardView) -> Element {
    let next_day = &view.next_day;
    let prep_date = format::format_headline_date(next_day.date);
    let summary = t!(
        "reminder-summary-value",
        pickups = next_day.pickups.to_string(),
        dropoffs = next_day.dropoffs.to_string()
    );
    let projected = format::format_currency(next_day.revenue);

    let facts = [
        (t!("reminder-pending"), next_day.pending.to_string(), "text-pending"),
        (t!("reminder-prep-vehicles"), next_day.overdue.to_string(), "text-attention"),
        (t!("reminder-new-customers"), next_day.new_customers.to_string(), ""),
        (t!("reminder-projected-revenue"), projected, ""),
    ];

    rsx! {
        aside { class: "dashboard-card next-day",
            div {
                h2 { {t!("reminder-title")} }
                p { class: "dashboard-card__subtitle",
                    {t!("reminder-prep-for")}
                    " "
                    span { class: "next-day__date", "{prep_date}" }
                    "."
                }
            }

            div { class: "next-day__summary",
                div { class: "next-day__icon", aria_hidden: "true",
                    svg {
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "1.6",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            d: "M7.5 3v3m9-3v3M4.5 9.75h15m-13.5 3h4.5m-4.5 3h6m5.25-6.75V19.5a1.5 1.5 0 0 1-1.5 1.5h-9a1.5 1.5 0 0 1-1.5-1.5V9.75h12Z",
                        }
                    }
                }
                div {
                    p { class: "next-day__summary-label", {t!("reminder-summary-label")} }
                    p { class: "next-day__summary-value", "{summary}" }
                }
            }

            dl { class: "next-day__facts",
                for (label, value, tone) in facts.into_iter() {
                    div { key: "{label}", class: "next-day__fact",
                        dt { "{label}" }
                        dd { class: "{tone}", "{value}" }
                    }
                }
            }

            div { class: "next-day__actions",
                h3 { {t!("reminder-action-list")} }
                ul { class: "reminder-list",
                    for task in view.reminders.iter() {
                        {render_reminder(task)}
                    }
                }
            }

            // Presentational only; reminders are not dispatched anywhere.
            div { class: "next-day__footer",
                button { r#type: "button", class: "button button--primary",
                    {t!("reminder-send")}
                }
                button { r#type: "button", class: "button button--ghost",
                    {t!("reminder-export")}
                }
            }
        }
    }
}

fn render_reminder(task: &ReminderTask) -> Element {
    let key = task.key();
    let time = task.time_label();
    let badge_class = format!("reminder-status {}", task.status.css_class());

    rsx! {
        li { key: "{key}", class: "reminder",
            div { class: "reminder__head",
                div {
                    p { class: "reminder__time", "{time}" }
                    p { class: "reminder__vehicle", "{task.vehicle}" }
                    p { class: "reminder__who", "{task.customer} · {task.location}" }
                }
                span { class: badge_class, "{task.status.label()}" }
            }
            div { class: "reminder__meta",
                span { "{task.contact}" }
                if let Some(note) = task.note.as_ref() {
                    span { class: "reminder__note", "{note}" }
                }
            }
        }
    }
}
