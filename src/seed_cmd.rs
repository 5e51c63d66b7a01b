//! Seed command: generate the date-dimension seed artifact.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use demeter_dimension::{DateDimensionRow, dim_date_rows};
use demeter_io::write_delimited;

use crate::cli::SeedArgs;
use crate::config::DemeterConfig;
use crate::convert;

/// Run date-dimension seed generation.
pub fn run(args: SeedArgs) -> Result<()> {
    let _cmd = info_span!("seed").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: DemeterConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Resolve range and output path
    let dim_config = convert::build_dim_date_config(&config.dates)?;
    let output = args.output.unwrap_or(config.dates.output);

    if dim_config.n_rows() == 0 {
        warn!(
            start = %dim_config.start(),
            end = %dim_config.end(),
            "empty date range, writing header-only artifact"
        );
    }

    // 3. Generate and write
    info!(
        start = %dim_config.start(),
        end = %dim_config.end(),
        path = %output.display(),
        "generating date dimension seed"
    );
    let n_rows = write_delimited(&output, &DateDimensionRow::HEADER, dim_date_rows(&dim_config))
        .with_context(|| format!("failed to write seed artifact: {}", output.display()))?;
    info!(n_rows, path = %output.display(), "date dimension seed written");

    Ok(())
}
