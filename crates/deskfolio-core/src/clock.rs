//! Wall-clock access and the date/time formats shown on the desktop.

use chrono::{DateTime, FixedOffset, Local};

/// Source of the current local time.
///
/// The desktop reads the clock for the menu bar, the lock screen, the
/// terminal's `date` builtin and its login banner.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Reads the operating system's local time.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

// ── formats ───────────────────────────────────────────────────────────────

/// `Thu Oct 15 2026 14:03:11 GMT+0900`
pub fn terminal_date(now: DateTime<FixedOffset>) -> String {
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

/// `10/15/2026, 2:03:11 PM`
pub fn login_stamp(now: DateTime<FixedOffset>) -> String {
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// `14:03`
pub fn lock_time(now: DateTime<FixedOffset>) -> String {
    now.format("%H:%M").to_string()
}

/// `Thursday, October 15`
pub fn lock_date(now: DateTime<FixedOffset>) -> String {
    now.format("%A, %B %-d").to_string()
}

/// `Thu Oct 15`
pub fn menubar_date(now: DateTime<FixedOffset>) -> String {
    now.format("%a %b %-d").to_string()
}

/// `2:03 PM`
pub fn menubar_time(now: DateTime<FixedOffset>) -> String {
    now.format("%-I:%M %p").to_string()
}

#[cfg(test)]
pub(crate) fn test_clock() -> FixedClock {
    use chrono::TimeZone;

    let seoul = FixedOffset::east_opt(9 * 3600).expect("valid offset");
    let at = seoul
        .with_ymd_and_hms(2026, 10, 15, 14, 3, 11)
        .single()
        .expect("unambiguous instant");
    FixedClock(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_date_format() {
        assert_eq!(terminal_date(test_clock().now()), "Thu Oct 15 2026 14:03:11 GMT+0900");
    }

    #[test]
    fn login_stamp_is_twelve_hour() {
        assert_eq!(login_stamp(test_clock().now()), "10/15/2026, 2:03:11 PM");
    }

    #[test]
    fn lock_screen_formats() {
        let now = test_clock().now();
        assert_eq!(lock_time(now), "14:03");
        assert_eq!(lock_date(now), "Thursday, October 15");
    }

    #[test]
    fn menubar_formats() {
        let now = test_clock().now();
        assert_eq!(menubar_date(now), "Thu Oct 15");
        assert_eq!(menubar_time(now), "2:03 PM");
    }
}
