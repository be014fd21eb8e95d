use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::config::settings::ServiceConfig;

/// Load config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading config '{}'", path.as_ref().display()))?;
    let config: ServiceConfig =
        serde_yaml::from_str(&raw).map_err(|err| anyhow!("Invalid config format: {}", err))?;
    Ok(config)
}
