//! # demeter-dimension
//!
//! The date-dimension seed table: row model, weekday label table, and
//! row generation over an inclusive date range.
//!
//! ## Quick Start
//!
//! ```ignore
//! use demeter_calendar::CivilDate;
//! use demeter_dimension::{DimDateConfig, dim_date_rows};
//!
//! let start = CivilDate::new(2020, 1, 1).unwrap();
//! let end = CivilDate::new(2020, 1, 7).unwrap();
//! let config = DimDateConfig::new(start, end);
//!
//! let rows: Vec<_> = dim_date_rows(&config).collect();
//! assert_eq!(rows.len(), 7);
//! assert_eq!(rows[0].date_key, 20200101);
//! assert_eq!(rows[0].day_of_week, "水"); // 2020-01-01 was a Wednesday
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `labels` | Monday-first weekday label table |
//! | `row` | Seed table row model |
//! | `generate` | Row generation over a date range |

mod generate;
mod labels;
mod row;

pub use generate::{DimDateConfig, Rows, dim_date_rows};
pub use labels::WeekdayLabels;
pub use row::DateDimensionRow;
