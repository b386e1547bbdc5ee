//! Wall-clock scheduling in the parks' civil timezone.
//!
//! A reservation request carries only an `HH:MM` start time and a duration
//! in minutes. The date is anchored to "today" in the configured civil
//! zone, derived from the injected clock, so a server running in another
//! region still interprets the request on the parks' calendar day.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::GatewayError;

/// A resolved reservation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledInterval {
    /// Parsed wall-clock start time.
    pub start_time: NaiveTime,
    /// Absolute start instant.
    pub start_at: DateTime<Utc>,
    /// Absolute end instant, exactly `duration` minutes after `start_at`.
    pub end_at: DateTime<Utc>,
}

impl ScheduledInterval {
    /// Canonical `HH:MM` rendering of the wall-clock start time.
    #[must_use]
    pub fn start_time_string(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }
}

/// Resolves an `HH:MM` start time and duration into an absolute interval
/// on today's date in `zone`.
///
/// Ambiguous local times (the fall-back hour) resolve to the earliest
/// instant. Local times skipped by a spring-forward transition do not
/// exist on that date and are rejected.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidInput`] when the time is unparseable or
/// out of the `00:00`–`23:59` range, when the duration is not a positive
/// integer or is too large to represent as an interval, or when the civil
/// time does not exist on today's date.
pub fn resolve_interval(
    start_time: &str,
    duration_minutes: i64,
    zone: Tz,
    now: DateTime<Utc>,
) -> Result<ScheduledInterval, GatewayError> {
    if duration_minutes <= 0 {
        return Err(GatewayError::InvalidInput(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    let duration =
        chrono::TimeDelta::try_minutes(duration_minutes).ok_or_else(duration_too_large)?;

    let time = NaiveTime::parse_from_str(start_time.trim(), "%H:%M").map_err(|_| {
        GatewayError::InvalidInput(format!("start time {start_time:?} is not a valid HH:MM time"))
    })?;

    let today = now.with_timezone(&zone).date_naive();
    let civil_start = today.and_time(time);

    let start_local = match zone.from_local_datetime(&civil_start) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            return Err(GatewayError::InvalidInput(format!(
                "start time {start_time} does not exist on {today} in {zone}"
            )));
        }
    };

    let start_at = start_local.with_timezone(&Utc);
    let end_at = start_at
        .checked_add_signed(duration)
        .ok_or_else(duration_too_large)?;

    Ok(ScheduledInterval {
        start_time: time,
        start_at,
        end_at,
    })
}

fn duration_too_large() -> GatewayError {
    GatewayError::InvalidInput("duration is too large".to_string())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    fn instant(s: &str) -> DateTime<Utc> {
        let Ok(dt) = s.parse::<DateTime<Utc>>() else {
            panic!("bad test instant {s}");
        };
        dt
    }

    #[test]
    fn end_is_exactly_duration_after_start() {
        let now = instant("2026-08-25T15:00:00Z");
        let Ok(interval) = resolve_interval("09:00", 60, New_York, now) else {
            panic!("09:00 should resolve");
        };
        assert_eq!(interval.end_at - interval.start_at, chrono::Duration::minutes(60));
    }

    #[test]
    fn anchored_to_todays_civil_date_in_zone() {
        // 2026-08-25 is in EDT (UTC-4), so 09:00 local is 13:00 UTC.
        let now = instant("2026-08-25T15:00:00Z");
        let Ok(interval) = resolve_interval("09:00", 60, New_York, now) else {
            panic!("09:00 should resolve");
        };
        assert_eq!(interval.start_at, instant("2026-08-25T13:00:00Z"));
        assert_eq!(interval.end_at, instant("2026-08-25T14:00:00Z"));
        assert_eq!(interval.start_time_string(), "09:00");
    }

    #[test]
    fn server_utc_date_does_not_leak_into_anchoring() {
        // 01:30 UTC on Aug 26 is still Aug 25 in New York; "today" must be
        // the park's calendar day.
        let now = instant("2026-08-26T01:30:00Z");
        let Ok(interval) = resolve_interval("22:00", 30, New_York, now) else {
            panic!("22:00 should resolve");
        };
        assert_eq!(interval.start_at, instant("2026-08-26T02:00:00Z"));
    }

    #[test]
    fn rejects_unparseable_times() {
        let now = instant("2026-08-25T15:00:00Z");
        for bad in ["", "0900", "ab:cd", "24:00", "12:60", "12:00:30"] {
            let result = resolve_interval(bad, 60, New_York, now);
            assert!(
                matches!(result, Err(GatewayError::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_positive_durations() {
        let now = instant("2026-08-25T15:00:00Z");
        for bad in [0, -5, i64::MIN] {
            let result = resolve_interval("09:00", bad, New_York, now);
            assert!(matches!(result, Err(GatewayError::InvalidInput(_))));
        }
    }

    #[test]
    fn rejects_absurdly_large_durations() {
        // i64::MAX minutes overflows the interval representation itself;
        // 300 billion minutes fits an interval but overflows the calendar.
        // Both must come back as invalid input, not abort the request.
        let now = instant("2026-08-25T15:00:00Z");
        for bad in [i64::MAX, 300_000_000_000] {
            let result = resolve_interval("09:00", bad, New_York, now);
            assert!(
                matches!(result, Err(GatewayError::InvalidInput(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn spring_forward_gap_is_rejected() {
        // 2026-03-08 02:30 does not exist in New York (clocks jump from
        // 02:00 to 03:00).
        let now = instant("2026-03-08T12:00:00Z");
        let result = resolve_interval("02:30", 60, New_York, now);
        assert!(matches!(result, Err(GatewayError::InvalidInput(_))));
    }

    #[test]
    fn fall_back_ambiguity_resolves_to_earliest() {
        // 2026-11-01 01:30 occurs twice in New York; the earliest is the
        // EDT (UTC-4) occurrence at 05:30 UTC.
        let now = instant("2026-11-01T12:00:00Z");
        let Ok(interval) = resolve_interval("01:30", 60, New_York, now) else {
            panic!("ambiguous time should resolve");
        };
        assert_eq!(interval.start_at, instant("2026-11-01T05:30:00Z"));
    }
}
