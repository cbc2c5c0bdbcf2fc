//! Next-day preparation checklist.

use serde::Serialize;
use time::{macros::time, Time};

use crate::core::format;

/// Reminder badge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReminderStatus {
    Confirmed,
    Pending,
    Attention,
}

impl ReminderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Attention => "Attention",
        }
    }

    /// Badge modifier class, e.g. `reminder-status--pending`.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Confirmed => "reminder-status--confirmed",
            Self::Pending => "reminder-status--pending",
            Self::Attention => "reminder-status--attention",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderTask {
    pub time: Time,
    pub customer: String,
    pub vehicle: String,
    pub location: String,
    pub contact: String,
    pub status: ReminderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ReminderTask {
    fn new(
        time: Time,
        customer: &str,
        vehicle: &str,
        location: &str,
        contact: &str,
        status: ReminderStatus,
        note: impl Into<String>,
    ) -> Self {
        Self {
            time,
            customer: customer.to_string(),
            vehicle: vehicle.to_string(),
            location: location.to_string(),
            contact: contact.to_string(),
            status,
            note: Some(note.into()),
        }
    }

    pub fn time_label(&self) -> String {
        format::format_clock(self.time)
    }

    /// Row key: `08:30-Olivia Carter`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.time_label(), self.customer)
    }
}

/// Tomorrow's fixed action list. `day_label` is the short label of the next
/// day (`Tue, Jun 11`) and lands in the first task's note.
pub fn reminder_tasks(day_label: &str) -> Vec<ReminderTask> {
    vec![
        ReminderTask::new(
            time!(8:30),
            "Olivia Carter",
            "Hyundai Tucson",
            "Downtown Hub",
            "+1 (555) 0198",
            ReminderStatus::Confirmed,
            format!("Deliver EV charging card to {day_label} desk"),
        ),
        ReminderTask::new(
            time!(10:00),
            "Marcus Lee",
            "BMW 3 Series",
            "Airport Terminal 1",
            "+1 (555) 4433",
            ReminderStatus::Pending,
            "Awaiting proof of insurance",
        ),
        ReminderTask::new(
            time!(13:45),
            "Priya Patel",
            "Toyota Highlander",
            "Waterfront Branch",
            "+1 (555) 2277",
            ReminderStatus::Confirmed,
            "Install two child seats",
        ),
        ReminderTask::new(
            time!(17:15),
            "Jackson Reed",
            "Ford Transit",
            "Corporate Delivery - 5th Ave",
            "+1 (555) 7411",
            ReminderStatus::Attention,
            "Vehicle requires full detailing tonight",
        ),
    ]
}
