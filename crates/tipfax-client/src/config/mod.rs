//! Client config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use tipfax_core::error::{Result, TipfaxError};

pub use schema::{AstroSection, ClientConfig, PrinterSection};

/// Env var overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "TIPFAX_CONFIG";
/// Config file used when `TIPFAX_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "tipfax.yaml";

pub fn load_from_file(path: &str) -> Result<ClientConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TipfaxError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ClientConfig> {
    let cfg: ClientConfig = serde_yaml::from_str(s)
        .map_err(|e| TipfaxError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists; a missing file yields the built-in defaults.
pub fn load_or_default(path: &str) -> Result<ClientConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ClientConfig::default()),
        Err(e) => Err(TipfaxError::Config(format!("read config failed: {e}"))),
    }
}
