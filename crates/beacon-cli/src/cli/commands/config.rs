//! `beacon config` – show config location and effective values.

use anyhow::Result;
use beacon_core::config;

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init_at(&path)?;
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
