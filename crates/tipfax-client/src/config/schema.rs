use serde::Deserialize;
use tipfax_core::credential::DEFAULT_TOKEN_ENV;
use tipfax_core::error::{Result, TipfaxError};
use tipfax_core::protocol::DEFAULT_ASTRO_URL;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub astro: AstroSection,

    #[serde(default)]
    pub printer: Option<PrinterSection>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            astro: AstroSection::default(),
            printer: None,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TipfaxError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.astro.validate()?;
        if let Some(p) = &self.printer {
            p.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AstroSection {
    #[serde(default = "default_url")]
    pub url: String,

    /// Env var holding the JWT.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Tokens shorter than this are accepted with a warning.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

impl Default for AstroSection {
    fn default() -> Self {
        Self {
            url: default_url(),
            token_env: default_token_env(),
            min_token_len: default_min_token_len(),
        }
    }
}

impl AstroSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.url.starts_with("ws://") || self.url.starts_with("wss://")) {
            return Err(TipfaxError::Config(
                "astro.url must start with ws:// or wss://".into(),
            ));
        }
        if self.token_env.trim().is_empty() {
            return Err(TipfaxError::Config("astro.token_env must not be empty".into()));
        }
        if self.min_token_len > 4096 {
            return Err(TipfaxError::Config(
                "astro.min_token_len must be at most 4096".into(),
            ));
        }
        Ok(())
    }
}

fn default_url() -> String {
    DEFAULT_ASTRO_URL.into()
}
fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.into()
}
fn default_min_token_len() -> usize {
    50
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrinterSection {
    /// Printer device file, e.g. `/dev/usb/lp0`.
    pub device: String,
}

impl PrinterSection {
    pub fn validate(&self) -> Result<()> {
        if self.device.trim().is_empty() {
            return Err(TipfaxError::Config("printer.device must not be empty".into()));
        }
        Ok(())
    }
}
