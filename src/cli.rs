use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Demeter warehouse seed and mock master data toolkit.
#[derive(Parser)]
#[command(
    name = "demeter",
    version,
    about = "Warehouse seed and mock master data toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the date-dimension seed artifact.
    Seed(SeedArgs),
    /// Generate mock category/service/product master data artifacts.
    Products(ProductsArgs),
    /// Invoke `dbt run` for the transformation project.
    Dbt(DbtArgs),
}

/// Arguments for the `seed` subcommand.
#[derive(clap::Args)]
pub struct SeedArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "demeter.toml")]
    pub config: PathBuf,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `products` subcommand.
#[derive(clap::Args)]
pub struct ProductsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "demeter.toml")]
    pub config: PathBuf,

    /// Override output directory for mock artifacts from config.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Warehouse database name, for load-target logging only.
    #[arg(long, env = "DEMETER_WAREHOUSE_DATABASE")]
    pub database: Option<String>,

    /// Warehouse schema name, for load-target logging only.
    #[arg(long, env = "DEMETER_WAREHOUSE_SCHEMA")]
    pub schema: Option<String>,
}

/// Arguments for the `dbt` subcommand.
#[derive(clap::Args)]
pub struct DbtArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "demeter.toml")]
    pub config: PathBuf,

    /// Override dbt project directory from config.
    #[arg(short, long)]
    pub project_dir: Option<PathBuf>,
}
