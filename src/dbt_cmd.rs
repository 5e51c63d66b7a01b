//! Dbt command: invoke `dbt run` for the transformation project.

use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use crate::cli::DbtArgs;
use crate::config::DemeterConfig;

/// Run the dbt transformation project and surface its exit status.
pub fn run(args: DbtArgs) -> Result<()> {
    let _cmd = info_span!("dbt").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: DemeterConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Resolve the project directory
    let project_dir = args.project_dir.unwrap_or(config.dbt.project_dir);
    if !project_dir.is_dir() {
        bail!("dbt project directory not found: {}", project_dir.display());
    }

    // 3. Run dbt, inheriting stdio so its own output reaches the user
    info!(
        bin = %config.dbt.bin,
        project_dir = %project_dir.display(),
        "running dbt"
    );
    let status = Command::new(&config.dbt.bin)
        .arg("run")
        .arg("--project-dir")
        .arg(&project_dir)
        .args(&config.dbt.args)
        .status()
        .with_context(|| format!("failed to launch {}", config.dbt.bin))?;

    if !status.success() {
        bail!("dbt run failed with {status}");
    }

    info!("dbt run completed");
    Ok(())
}
