//! Row generation over a date range.

use demeter_calendar::{CivilDate, DateRange, date_range, n_days};

use crate::labels::WeekdayLabels;
use crate::row::DateDimensionRow;

/// Configuration for date-dimension row generation.
#[derive(Debug, Clone)]
pub struct DimDateConfig {
    start: CivilDate,
    end: CivilDate,
    labels: WeekdayLabels,
}

impl DimDateConfig {
    /// Creates a configuration for the inclusive range `[start, end]` with
    /// the default label table.
    ///
    /// `start > end` is allowed and produces an empty row set.
    pub fn new(start: CivilDate, end: CivilDate) -> Self {
        Self {
            start,
            end,
            labels: WeekdayLabels::default(),
        }
    }

    /// Replaces the weekday label table.
    pub fn with_labels(mut self, labels: WeekdayLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Returns the first date of the range.
    pub fn start(&self) -> CivilDate {
        self.start
    }

    /// Returns the last date of the range.
    pub fn end(&self) -> CivilDate {
        self.end
    }

    /// Returns the number of rows generation will produce.
    pub fn n_rows(&self) -> usize {
        n_days(self.start, self.end)
    }
}

/// Returns a lazy iterator of seed rows for every date in the configured
/// range, in ascending date order.
pub fn dim_date_rows(config: &DimDateConfig) -> Rows<'_> {
    Rows {
        dates: date_range(config.start, config.end),
        labels: &config.labels,
    }
}

/// Iterator of [`DateDimensionRow`]s. See [`dim_date_rows`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    dates: DateRange,
    labels: &'a WeekdayLabels,
}

impl Iterator for Rows<'_> {
    type Item = DateDimensionRow;

    fn next(&mut self) -> Option<DateDimensionRow> {
        let date = self.dates.next()?;
        Some(DateDimensionRow::from_date(date, self.labels))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dates.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}
