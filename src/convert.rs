//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use demeter_calendar::CivilDate;
use demeter_dimension::{DimDateConfig, WeekdayLabels};
use demeter_mock::MockConfig;

use crate::config::{DatesToml, ProductsToml};

/// Parses an ISO `YYYY-MM-DD` config value into a [`CivilDate`].
pub fn parse_date(field: &str, value: &str) -> Result<CivilDate> {
    value
        .parse()
        .with_context(|| format!("invalid [dates].{field}: {value:?}"))
}

/// Builds a [`DimDateConfig`] from the TOML dates configuration.
pub fn build_dim_date_config(dates: &DatesToml) -> Result<DimDateConfig> {
    let start = parse_date("start", &dates.start)?;
    let end = parse_date("end", &dates.end)?;
    let mut config = DimDateConfig::new(start, end);
    if let Some(ref labels) = dates.day_of_week_labels {
        config = config.with_labels(WeekdayLabels::new(labels.clone()));
    }
    Ok(config)
}

/// Builds a [`MockConfig`] from the TOML products configuration.
///
/// The per-combination range is validated downstream when products are
/// generated.
pub fn build_mock_config(products: &ProductsToml) -> MockConfig {
    MockConfig::default().with_per_combo(products.min_per_combo, products.max_per_combo)
}
