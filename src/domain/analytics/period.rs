//! Dashboard time-window predicate.

use chrono::{DateTime, Duration, Local, Months, NaiveTime, Utc};

/// Time window applied to submissions before aggregation, keyed by the
/// `period` query parameter. Unknown parameter values behave as [`Period::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Day,
    Week,
    Month,
    #[default]
    All,
}

impl Period {
    pub fn from_param(param: &str) -> Self {
        match param {
            "day" => Period::Day,
            "week" => Period::Week,
            "month" => Period::Month,
            _ => Period::All,
        }
    }

    /// The inclusive lower bound for `created_at`, or `None` for no filter.
    ///
    /// - `Day`: start of the current local day
    /// - `Week`: now minus 7×24h
    /// - `Month`: same day-of-month one calendar month prior (chrono clamps
    ///   at month ends, e.g. Mar 31 → Feb 28/29)
    pub fn cutoff(&self, now: DateTime<Local>) -> Option<DateTime<Utc>> {
        let local = match self {
            Period::Day => now.with_time(NaiveTime::MIN).earliest().unwrap_or(now),
            Period::Week => now - Duration::days(7),
            Period::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
            Period::All => return None,
        };
        Some(local.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn unknown_params_behave_as_all() {
        assert_eq!(Period::from_param("day"), Period::Day);
        assert_eq!(Period::from_param("week"), Period::Week);
        assert_eq!(Period::from_param("month"), Period::Month);
        assert_eq!(Period::from_param("all"), Period::All);
        assert_eq!(Period::from_param("fortnight"), Period::All);
        assert_eq!(Period::from_param(""), Period::All);
    }

    #[test]
    fn all_applies_no_filter() {
        assert_eq!(Period::All.cutoff(Local::now()), None);
    }

    #[test]
    fn day_cutoff_is_local_midnight() {
        let now = Local.with_ymd_and_hms(2026, 8, 29, 14, 30, 45).unwrap();
        let cutoff = Period::Day.cutoff(now).unwrap().with_timezone(&Local);
        assert_eq!(cutoff.date_naive(), now.date_naive());
        assert_eq!(cutoff.num_seconds_from_midnight(), 0);
    }

    #[test]
    fn week_cutoff_is_seven_days_back() {
        let now = Local.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap();
        let cutoff = Period::Week.cutoff(now).unwrap();
        assert_eq!(now.with_timezone(&Utc) - cutoff, Duration::days(7));
    }

    #[test]
    fn month_cutoff_uses_calendar_arithmetic() {
        let now = Local.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap();
        let cutoff = Period::Month.cutoff(now).unwrap().with_timezone(&Local);
        assert_eq!(
            cutoff.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2026, 7, 29).unwrap()
        );
        assert_eq!(cutoff.time(), now.time());
    }

    #[test]
    fn month_cutoff_clamps_at_month_end() {
        let now = Local.with_ymd_and_hms(2026, 3, 31, 9, 0, 0).unwrap();
        let cutoff = Period::Month.cutoff(now).unwrap().with_timezone(&Local);
        assert_eq!(
            cutoff.date_naive(),
            chrono::NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn yesterday_is_outside_the_day_window() {
        let now = Local::now();
        let cutoff = Period::Day.cutoff(now).unwrap();
        let yesterday = (now - Duration::days(1)).with_timezone(&Utc);
        assert!(yesterday < cutoff);
    }
}
