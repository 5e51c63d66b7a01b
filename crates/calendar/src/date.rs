//! Civil date value type with dimension accessors.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// A civil (Gregorian) calendar date restricted to years 1..=9999.
///
/// The year restriction guarantees that [`CivilDate::date_key`] fits a
/// `u32` and that the [`Display`](fmt::Display) form is always a 10-byte
/// `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate(pub(crate) NaiveDate);

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` is not in
    /// 1..=9999, and [`CalendarError::InvalidDate`] if (year, month, day)
    /// does not name a real Gregorian date (e.g. 2021-02-29).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=9999).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Returns the year (1..=9999).
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the calendar quarter (1..=4).
    pub fn quarter(self) -> u8 {
        (self.month() - 1) / 3 + 1
    }

    /// Returns the `YYYYMMDD` integer encoding of this date.
    ///
    /// The largest possible value, 99991231, fits a `u32` because the
    /// constructor rejects years above 9999.
    pub fn date_key(self) -> u32 {
        self.year() as u32 * 10_000 + u32::from(self.month()) * 100 + u32::from(self.day())
    }

    /// Returns the weekday index with Monday = 0 through Sunday = 6.
    pub fn weekday_index(self) -> usize {
        self.0.weekday().num_days_from_monday() as usize
    }

    /// Returns the next calendar day, or `None` past 9999-12-31.
    pub fn succ(self) -> Option<Self> {
        let next = self.0.succ_opt()?;
        if next.year() > 9999 {
            return None;
        }
        Some(Self(next))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed =
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CalendarError::InvalidFormat {
                input: s.to_string(),
            })?;
        if !(1..=9999).contains(&parsed.year()) {
            return Err(CalendarError::YearOutOfRange {
                year: parsed.year(),
            });
        }
        Ok(Self(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CivilDate::new(2020, 1, 1).unwrap();
        assert_eq!(date.year(), 2020);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn new_leap_day_valid() {
        let date = CivilDate::new(2020, 2, 29).unwrap();
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn new_leap_day_invalid_in_common_year() {
        assert_eq!(
            CivilDate::new(2021, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2021,
                month: 2,
                day: 29,
            }
        );
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CivilDate::new(2020, 13, 1).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2020,
                month: 13,
                day: 1,
            }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert!(CivilDate::new(2020, 4, 31).is_err());
        assert!(CivilDate::new(2020, 1, 0).is_err());
    }

    #[test]
    fn new_year_out_of_range() {
        assert_eq!(
            CivilDate::new(0, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 0 }
        );
        assert_eq!(
            CivilDate::new(10_000, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 10_000 }
        );
    }

    #[test]
    fn date_key_encoding() {
        assert_eq!(CivilDate::new(2020, 1, 1).unwrap().date_key(), 20200101);
        assert_eq!(CivilDate::new(2030, 12, 31).unwrap().date_key(), 20301231);
        assert_eq!(CivilDate::new(1, 1, 1).unwrap().date_key(), 10101);
        assert_eq!(CivilDate::new(9999, 12, 31).unwrap().date_key(), 99991231);
    }

    #[test]
    fn quarter_all_months() {
        let expected = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
        for month in 1..=12u8 {
            let date = CivilDate::new(2020, month, 1).unwrap();
            assert_eq!(date.quarter(), expected[month as usize - 1]);
        }
    }

    #[test]
    fn weekday_index_monday_first() {
        // 2020-01-01 was a Wednesday, 2020-01-06 a Monday.
        assert_eq!(CivilDate::new(2020, 1, 1).unwrap().weekday_index(), 2);
        assert_eq!(CivilDate::new(2020, 1, 6).unwrap().weekday_index(), 0);
        assert_eq!(CivilDate::new(2020, 1, 5).unwrap().weekday_index(), 6);
    }

    #[test]
    fn succ_within_month() {
        let next = CivilDate::new(2020, 6, 15).unwrap().succ().unwrap();
        assert_eq!(next, CivilDate::new(2020, 6, 16).unwrap());
    }

    #[test]
    fn succ_month_boundary() {
        let next = CivilDate::new(2020, 1, 31).unwrap().succ().unwrap();
        assert_eq!(next, CivilDate::new(2020, 2, 1).unwrap());
    }

    #[test]
    fn succ_leap_february() {
        let feb28 = CivilDate::new(2020, 2, 28).unwrap();
        let feb29 = feb28.succ().unwrap();
        assert_eq!(feb29, CivilDate::new(2020, 2, 29).unwrap());
        assert_eq!(feb29.succ().unwrap(), CivilDate::new(2020, 3, 1).unwrap());
    }

    #[test]
    fn succ_common_february() {
        let next = CivilDate::new(2021, 2, 28).unwrap().succ().unwrap();
        assert_eq!(next, CivilDate::new(2021, 3, 1).unwrap());
    }

    #[test]
    fn succ_year_wrap() {
        let next = CivilDate::new(2020, 12, 31).unwrap().succ().unwrap();
        assert_eq!(next, CivilDate::new(2021, 1, 1).unwrap());
    }

    #[test]
    fn succ_end_of_supported_range() {
        assert_eq!(CivilDate::new(9999, 12, 31).unwrap().succ(), None);
    }

    #[test]
    fn display_iso_format() {
        assert_eq!(CivilDate::new(2020, 1, 1).unwrap().to_string(), "2020-01-01");
        assert_eq!(CivilDate::new(45, 3, 7).unwrap().to_string(), "0045-03-07");
    }

    #[test]
    fn from_str_valid() {
        let date: CivilDate = "2020-01-01".parse().unwrap();
        assert_eq!(date, CivilDate::new(2020, 1, 1).unwrap());
    }

    #[test]
    fn from_str_invalid_format() {
        let err = "01/01/2020".parse::<CivilDate>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidFormat { .. }));
    }

    #[test]
    fn from_str_nonexistent_date() {
        let err = "2021-02-29".parse::<CivilDate>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidFormat { .. }));
    }

    #[test]
    fn display_parse_roundtrip() {
        let date = CivilDate::new(2024, 2, 29).unwrap();
        let roundtripped: CivilDate = date.to_string().parse().unwrap();
        assert_eq!(date, roundtripped);
    }

    #[test]
    fn ord_follows_calendar_order() {
        let earlier = CivilDate::new(2020, 12, 31).unwrap();
        let later = CivilDate::new(2021, 1, 1).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CivilDate>();
    }
}
