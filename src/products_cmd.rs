//! Products command: generate mock master data artifacts.

use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, info_span, warn};

use demeter_io::write_delimited;
use demeter_mock::{
    CategoryRow, ProductRow, ServiceRow, category_rows, product_rows, service_rows,
};

use crate::cli::ProductsArgs;
use crate::config::DemeterConfig;
use crate::convert;

/// Run mock master data generation.
pub fn run(args: ProductsArgs) -> Result<()> {
    let _cmd = info_span!("products").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: DemeterConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Create seeded RNG (CLI override wins)
    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // 3. Generate products over the category x service cross product
    let mock_config = convert::build_mock_config(&config.products);
    let products =
        product_rows(&mock_config, &mut rng).context("mock product generation failed")?;
    info!(n_products = products.len(), "mock product data generated");

    // 4. Write artifacts
    let out_dir = args.out_dir.unwrap_or(config.products.out_dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    // The bulk load itself stays external; the target is logged so runs
    // can be correlated with the downstream load.
    let load_target = match (&args.database, &args.schema) {
        (Some(database), Some(schema)) => Some(format!("{database}.{schema}")),
        (None, None) => None,
        _ => {
            warn!("load-target logging needs both --database and --schema, ignoring");
            None
        }
    };

    write_artifact(
        &out_dir.join("categories.csv"),
        &CategoryRow::HEADER,
        category_rows(),
        "categories",
        load_target.as_deref(),
    )?;
    write_artifact(
        &out_dir.join("services.csv"),
        &ServiceRow::HEADER,
        service_rows(),
        "services",
        load_target.as_deref(),
    )?;
    write_artifact(
        &out_dir.join("products.csv"),
        &ProductRow::HEADER,
        products,
        "products",
        load_target.as_deref(),
    )?;

    info!(out_dir = %out_dir.display(), "mock master artifacts written");
    Ok(())
}

/// Write one master table artifact and log its row count and, when a
/// warehouse target is known, the table it is destined for.
fn write_artifact<S: Serialize>(
    path: &Path,
    header: &[&str],
    rows: Vec<S>,
    table: &str,
    load_target: Option<&str>,
) -> Result<()> {
    let n_rows = write_delimited(path, header, rows)
        .with_context(|| format!("failed to write artifact: {}", path.display()))?;
    match load_target {
        Some(target) => {
            info!(n_rows, path = %path.display(), target = %format!("{target}.{table}"), "artifact written")
        }
        None => info!(n_rows, path = %path.display(), "artifact written"),
    }
    Ok(())
}
