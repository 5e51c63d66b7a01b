use std::path::PathBuf;

use serde::Deserialize;

/// Top-level demeter configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemeterConfig {
    /// Global RNG seed for mock data generation.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Date-dimension seed settings.
    #[serde(default)]
    pub dates: DatesToml,

    /// Mock master data settings.
    #[serde(default)]
    pub products: ProductsToml,

    /// dbt invocation settings.
    #[serde(default)]
    pub dbt: DbtToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatesToml {
    /// First date of the seed range, `YYYY-MM-DD`.
    #[serde(default = "default_start_date")]
    pub start: String,

    /// Last date of the seed range, `YYYY-MM-DD` (inclusive).
    #[serde(default = "default_end_date")]
    pub end: String,

    /// Output path for the seed artifact.
    #[serde(default = "default_dates_output")]
    pub output: PathBuf,

    /// Monday-first weekday label table (exactly 7 entries). The built-in
    /// Japanese table is used when unset.
    #[serde(default)]
    pub day_of_week_labels: Option<[String; 7]>,
}

impl Default for DatesToml {
    fn default() -> Self {
        Self {
            start: default_start_date(),
            end: default_end_date(),
            output: default_dates_output(),
            day_of_week_labels: None,
        }
    }
}

fn default_start_date() -> String {
    "2020-01-01".to_string()
}
fn default_end_date() -> String {
    "2030-12-31".to_string()
}
fn default_dates_output() -> PathBuf {
    PathBuf::from("dim_date_seed.csv")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductsToml {
    /// Output directory for the mock master artifacts.
    #[serde(default = "default_products_out_dir")]
    pub out_dir: PathBuf,

    /// Minimum products per category x service combination.
    #[serde(default = "default_min_per_combo")]
    pub min_per_combo: u32,

    /// Maximum products per category x service combination.
    #[serde(default = "default_max_per_combo")]
    pub max_per_combo: u32,
}

impl Default for ProductsToml {
    fn default() -> Self {
        Self {
            out_dir: default_products_out_dir(),
            min_per_combo: default_min_per_combo(),
            max_per_combo: default_max_per_combo(),
        }
    }
}

fn default_products_out_dir() -> PathBuf {
    PathBuf::from("mock_data")
}
fn default_min_per_combo() -> u32 {
    1
}
fn default_max_per_combo() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DbtToml {
    /// Directory of the dbt project to run.
    #[serde(default = "default_dbt_project_dir")]
    pub project_dir: PathBuf,

    /// dbt executable to invoke.
    #[serde(default = "default_dbt_bin")]
    pub bin: String,

    /// Extra arguments appended to `dbt run`.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for DbtToml {
    fn default() -> Self {
        Self {
            project_dir: default_dbt_project_dir(),
            bin: default_dbt_bin(),
            args: Vec::new(),
        }
    }
}

fn default_dbt_project_dir() -> PathBuf {
    PathBuf::from("dbt_project")
}
fn default_dbt_bin() -> String {
    "dbt".to_string()
}
