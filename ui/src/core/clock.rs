//! Reference clock for dashboard renders.

use time::OffsetDateTime;

/// Current instant in the host's local offset.
///
/// `now_local` can refuse to resolve the offset (multi-threaded Unix processes,
/// sandboxed hosts). In that case the render is anchored on UTC instead, which
/// only shifts the calendar day near midnight.
pub fn reference_now() -> OffsetDateTime {
    match OffsetDateTime::now_local() {
        Ok(now) => now,
        Err(err) => {
            tracing::warn!("local offset unavailable ({err}); anchoring dashboard on UTC");
            OffsetDateTime::now_utc()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn reference_now_tracks_wall_clock() {
        let before = OffsetDateTime::now_utc();
        let now = reference_now();
        let after = OffsetDateTime::now_utc();
        assert!(now >= before - Duration::seconds(1));
        assert!(now <= after + Duration::seconds(1));
    }
}
