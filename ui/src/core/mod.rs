//! Platform-agnostic helpers shared by the dashboard views.

pub mod clock;
pub mod format;
