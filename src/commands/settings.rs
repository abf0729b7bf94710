use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{resolve_config_path, Settings};
use crate::io::atomic::atomic_write;

/// Print the effective settings as TOML; with `init`, write them to the
/// config path instead (never overwriting an existing file).
pub fn main(settings: &Settings, cli_path: &Option<PathBuf>, init: bool) -> Result<i32> {
    let text = settings.to_toml()?;
    if !init {
        print!("{}", text);
        return Ok(0);
    }
    let path = resolve_config_path(cli_path).context("no home directory to place the config in")?;
    if path.exists() {
        eprintln!("config already exists at {}", path.display());
        return Ok(1);
    }
    atomic_write(&path, text.as_bytes()).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(0)
}
