//! Shared UI crate for Fleetdesk: dashboard logic, formatting and views.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;
