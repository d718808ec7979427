//! Calendar-day to epoch-time conversion without jiff's time zone machinery.
//!
//! A point's `t` is the UTC midnight of its calendar day. Going through
//! `Date::to_zoned(TimeZone::UTC)` is correct but builds a `Zoned` for every
//! observation; the helpers here use Rata Die day-numbering instead, which is
//! O(1) and cannot fail for any valid `jiff::civil::Date`.

use jiff::civil::Date;

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Rata Die day number of 1970-01-01.
const UNIX_EPOCH_RD: i32 = 719_163;

/// Convert a civil date to a Rata Die day number (days since 0001-01-01).
///
/// Uses the proleptic Gregorian calendar algorithm from Baum (2017). Year
/// divisions floor so years before 1 stay on the same day grid.
#[inline]
fn rata_die(d: Date) -> i32 {
    let y = d.year() as i32;
    let m = d.month() as i32;
    let day = d.day() as i32;

    // Shift March = month 1 so Feb (end of "year") is month 12
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2.div_euclid(4) - y2.div_euclid(100) + y2.div_euclid(400)
        - 306
}

/// Days since 1970-01-01 (negative before the epoch).
#[inline]
pub fn epoch_days(d: Date) -> i64 {
    i64::from(rata_die(d) - UNIX_EPOCH_RD)
}

/// Epoch milliseconds of UTC midnight on `d`.
#[inline]
pub fn epoch_millis(d: Date) -> i64 {
    epoch_days(d) * MILLIS_PER_DAY
}

/// Convert a millisecond span to fractional days.
#[inline]
pub fn millis_to_days(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    #[test]
    fn test_epoch_is_zero() {
        assert_eq!(epoch_millis(date(1970, 1, 1)), 0);
        assert_eq!(epoch_days(date(1970, 1, 2)), 1);
        assert_eq!(epoch_days(date(1969, 12, 31)), -1);
    }

    #[test]
    fn test_known_timestamp() {
        // 2024-01-01T00:00:00Z
        assert_eq!(epoch_millis(date(2024, 1, 1)), 1_704_067_200_000);
    }

    #[test]
    fn test_leap_day_spacing() {
        let feb28 = epoch_days(date(2024, 2, 28));
        let mar1 = epoch_days(date(2024, 3, 1));
        assert_eq!(mar1 - feb28, 2);

        let feb28 = epoch_days(date(2025, 2, 28));
        let mar1 = epoch_days(date(2025, 3, 1));
        assert_eq!(mar1 - feb28, 1);
    }

    #[test]
    fn test_epoch_millis_matches_jiff() {
        let dates = [
            date(1950, 6, 30),
            date(2000, 2, 29),
            date(2020, 3, 31),
            date(2025, 12, 31),
            date(2099, 1, 1),
        ];
        for d in dates {
            let jiff_ms = d
                .to_zoned(TimeZone::UTC)
                .unwrap()
                .timestamp()
                .as_millisecond();
            assert_eq!(epoch_millis(d), jiff_ms, "mismatch for {d}");
        }
    }

    #[test]
    fn test_epoch_millis_before_year_one() {
        let dates = [
            date(0, 3, 1),
            date(0, 2, 29),
            date(-1, 1, 1),
            date(-1, 12, 31),
            date(-100, 3, 1),
            date(-401, 7, 15),
            date(-2000, 2, 29),
        ];
        for d in dates {
            let jiff_ms = d
                .to_zoned(TimeZone::UTC)
                .unwrap()
                .timestamp()
                .as_millisecond();
            assert_eq!(epoch_millis(d), jiff_ms, "mismatch for {d}");
        }
        assert_eq!(epoch_days(date(0, 1, 1)) - epoch_days(date(-1, 12, 31)), 1);
    }

    #[test]
    fn test_millis_to_days() {
        assert_eq!(millis_to_days(MILLIS_PER_DAY * 30), 30.0);
        assert_eq!(millis_to_days(MILLIS_PER_DAY / 2), 0.5);
    }
}
