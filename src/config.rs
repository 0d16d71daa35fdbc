//! Session configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! escape_delay_ms = 25
//! poll_timeout_ms = 0
//! default_fg = "#ffffff"
//! default_bg = "default"
//! alternate_screen = true
//!
//! [log]
//! enabled = true
//! file = "trellis.log"
//! filter = "trellis_tui=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::types::Rgba;

/// How long to wait for the code that may follow an escape.
pub const DEFAULT_ESCAPE_DELAY_MS: u64 = 25;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub escape_delay_ms: u64,
    /// How long one poll may wait for input. 0 keeps polling non-blocking.
    pub poll_timeout_ms: u64,
    #[serde(deserialize_with = "deserialize_color")]
    pub default_fg: Rgba,
    #[serde(deserialize_with = "deserialize_color")]
    pub default_bg: Rgba,
    pub alternate_screen: bool,
    pub log: LogConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            escape_delay_ms: DEFAULT_ESCAPE_DELAY_MS,
            poll_timeout_ms: 0,
            default_fg: Rgba::TERMINAL_DEFAULT,
            default_bg: Rgba::TERMINAL_DEFAULT,
            alternate_screen: true,
            log: LogConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml_str(&source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Where tracing output goes. The terminal belongs to the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub enabled: bool,
    pub file: PathBuf,
    /// `EnvFilter` directive; `RUST_LOG` overrides it when set.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: PathBuf::from("trellis.log"),
            filter: "info".to_string(),
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> std::result::Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Rgba::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {raw}")))
}
