//! Seed table row model.

use demeter_calendar::CivilDate;
use serde::Serialize;

use crate::labels::WeekdayLabels;

/// One row of the date-dimension seed table.
///
/// Field order matches the artifact's column order; the struct serializes
/// directly into one delimited record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateDimensionRow {
    /// `YYYYMMDD` integer encoding, the table's primary key.
    pub date_key: u32,
    /// ISO `YYYY-MM-DD` form of the same date.
    pub date_value: String,
    /// 4-digit Gregorian year.
    pub year: i32,
    /// Month, 1..=12.
    pub month: u8,
    /// Day within the month, 1..=31.
    pub day: u8,
    /// Calendar quarter, 1..=4.
    pub quarter: u8,
    /// Weekday label from the Monday-first table.
    pub day_of_week: String,
}

impl DateDimensionRow {
    /// The artifact's header record, in column order.
    pub const HEADER: [&'static str; 7] = [
        "date_key",
        "date_value",
        "year",
        "month",
        "day",
        "quarter",
        "day_of_week",
    ];

    /// Builds the row for one calendar date.
    pub fn from_date(date: CivilDate, labels: &WeekdayLabels) -> Self {
        Self {
            date_key: date.date_key(),
            date_value: date.to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            quarter: date.quarter(),
            day_of_week: labels.label(date.weekday_index()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_date_wednesday() {
        let date = CivilDate::new(2020, 1, 1).unwrap();
        let row = DateDimensionRow::from_date(date, &WeekdayLabels::default());
        assert_eq!(row.date_key, 20200101);
        assert_eq!(row.date_value, "2020-01-01");
        assert_eq!(row.year, 2020);
        assert_eq!(row.month, 1);
        assert_eq!(row.day, 1);
        assert_eq!(row.quarter, 1);
        assert_eq!(row.day_of_week, "水");
    }

    #[test]
    fn from_date_monday_uses_first_label() {
        let date = CivilDate::new(2020, 1, 6).unwrap();
        let row = DateDimensionRow::from_date(date, &WeekdayLabels::default());
        assert_eq!(row.day_of_week, "月");
    }

    #[test]
    fn date_key_and_value_agree() {
        let date = CivilDate::new(2024, 11, 5).unwrap();
        let row = DateDimensionRow::from_date(date, &WeekdayLabels::default());
        assert_eq!(row.date_key, 20241105);
        assert_eq!(row.date_value, "2024-11-05");
    }

    #[test]
    fn header_column_order() {
        assert_eq!(DateDimensionRow::HEADER.len(), 7);
        assert_eq!(DateDimensionRow::HEADER[0], "date_key");
        assert_eq!(DateDimensionRow::HEADER[6], "day_of_week");
    }
}
