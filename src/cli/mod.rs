pub mod check;
pub mod generate;
pub mod range;

use anyhow::{Context, Result};

use luhnix::config::{LuhnixConfig, CONFIG_FILE};

pub fn load_config(profile: Option<&str>) -> Result<LuhnixConfig> {
    let config = LuhnixConfig::load().with_context(|| format!("Failed to load {CONFIG_FILE}"))?;

    match profile {
        Some(name) => Ok(config.with_profile(name)?),
        None => Ok(config),
    }
}
