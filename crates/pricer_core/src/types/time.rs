//! Calendar dates and the time-to-maturity measure.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `time_to_maturity`: ACT/365 year fraction between valuation and maturity
//!
//! Pricing code never reads the clock: the valuation date is always passed
//! in, and [`Date::today`] is only meant for the outermost boundary (the
//! command line).
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{time_to_maturity, Date};
//!
//! let valuation = Date::from_ymd(2025, 1, 1).unwrap();
//! let maturity = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! assert_eq!(time_to_maturity(valuation, maturity), 1.0);
//! ```

use chrono::{Datelike, Days, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Day basis of the time-to-maturity measure (Actual/365 Fixed).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and day arithmetic.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    /// `DateError::InvalidDate` if the components do not form a calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Errors
    /// `DateError::ParseError` if `s` is not a valid ISO 8601 date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the date `days` calendar days later (earlier when negative).
    ///
    /// Saturates at the chrono calendar bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 12, 30).unwrap();
    /// assert_eq!(date.add_days(3), Date::from_ymd(2025, 1, 2).unwrap());
    /// assert_eq!(date.add_days(-29), Date::from_ymd(2024, 12, 1).unwrap());
    /// ```
    pub fn add_days(self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        match shifted {
            Some(date) => Date(date),
            None if days >= 0 => Date(NaiveDate::MAX),
            None => Date(NaiveDate::MIN),
        }
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Time to maturity in years, `(maturity − valuation).days / 365`.
///
/// Never clamps: the result is zero on the maturity date and negative after
/// it, which pricing strategies treat as "no time value left".
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::{time_to_maturity, Date};
///
/// let valuation = Date::from_ymd(2024, 1, 1).unwrap();
/// let maturity = Date::from_ymd(2025, 1, 1).unwrap();
///
/// // 2024 is a leap year: 366 / 365
/// assert!((time_to_maturity(valuation, maturity) - 1.0027).abs() < 1e-4);
/// assert!(time_to_maturity(maturity, valuation) < 0.0);
/// ```
#[inline]
pub fn time_to_maturity(valuation_date: Date, maturity_date: Date) -> f64 {
    (maturity_date - valuation_date) as f64 / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ymd_valid_and_invalid() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 6, 15));

        assert_eq!(
            Date::from_ymd(2023, 2, 29),
            Err(DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let date: Date = "2026-03-20".parse().unwrap();
        assert_eq!(date.to_string(), "2026-03-20");
        assert_eq!(Date::parse(" 2026-03-20 ").unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Date::parse("20/03/2026"),
            Err(DateError::ParseError(_))
        ));
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_sub_is_signed_day_count() {
        let a = Date::from_ymd(2025, 1, 1).unwrap();
        let b = Date::from_ymd(2025, 3, 1).unwrap();
        assert_eq!(b - a, 59);
        assert_eq!(a - b, -59);
    }

    #[test]
    fn test_add_days_saturates() {
        let far = Date::from(NaiveDate::MAX);
        assert_eq!(far.add_days(10), far);
        let early = Date::from(NaiveDate::MIN);
        assert_eq!(early.add_days(-10), early);
    }

    #[test]
    fn test_time_to_maturity_act_365() {
        let valuation = Date::from_ymd(2025, 1, 1).unwrap();
        assert_relative_eq!(
            time_to_maturity(valuation, Date::from_ymd(2026, 1, 1).unwrap()),
            1.0,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            time_to_maturity(valuation, valuation.add_days(73)),
            0.2,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_time_to_maturity_zero_and_negative() {
        let valuation = Date::from_ymd(2025, 6, 30).unwrap();
        assert_eq!(time_to_maturity(valuation, valuation), 0.0);
        assert_relative_eq!(
            time_to_maturity(valuation, valuation.add_days(-365)),
            -1.0,
            epsilon = 1e-15
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_iso_8601() {
        let date = Date::from_ymd(2025, 12, 19).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-12-19\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (2000i32..2100i32, 1u32..13u32, 1u32..29u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_time_to_maturity_antisymmetric(a in date_strategy(), b in date_strategy()) {
                let forward = time_to_maturity(a, b);
                let backward = time_to_maturity(b, a);
                prop_assert!((forward + backward).abs() < 1e-12);
            }

            #[test]
            fn test_add_days_inverts_sub(a in date_strategy(), days in -4000i64..4000i64) {
                prop_assert_eq!(a.add_days(days) - a, days);
            }
        }
    }
}
