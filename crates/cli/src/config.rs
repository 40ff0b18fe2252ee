use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use sunspot_core::window::{DEFAULT_REMAP_OFFSET, DEFAULT_SLICES, DEFAULT_WINDOW_HOURS};
use sunspot_core::WindowConfig;
use sunspot_rpc::{DEFAULT_TIMEOUT, MAX_SIGNATURES_PER_REQUEST};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("invalid [window] section")]
    Window(#[from] sunspot_core::Error),

    #[error("source.limit must be between 1 and {max}, got {limit}")]
    LimitOutOfRange { limit: usize, max: usize },

    #[error("source.timeout_secs must be greater than zero")]
    TimeoutZero,

    #[error("toml deserialization error")]
    TomlDe(#[from] toml::de::Error),
}

/// Window selection parameters. Changing these also changes what the slice index means
/// to the globe, so they are normally left at their defaults.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowSection {
    pub slices: usize,
    pub duration_hours: usize,
    pub remap_offset: usize,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            slices: DEFAULT_SLICES,
            duration_hours: DEFAULT_WINDOW_HOURS,
            remap_offset: DEFAULT_REMAP_OFFSET,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceSection {
    pub rpc_url: Option<String>,
    /// Most recent signatures to fetch per address.
    pub limit: usize,
    pub timeout_secs: u64,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            rpc_url: None,
            limit: MAX_SIGNATURES_PER_REQUEST,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Contents of a `sunspot.toml` file. Every field has a default.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SunspotConfig {
    pub window: WindowSection,
    pub source: SourceSection,
}

impl SunspotConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let cfg: SunspotConfig = toml::from_str(toml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window_config()?;
        let limit = self.source.limit;
        if limit == 0 || limit > MAX_SIGNATURES_PER_REQUEST {
            return Err(ConfigError::LimitOutOfRange {
                limit,
                max: MAX_SIGNATURES_PER_REQUEST,
            });
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::TimeoutZero);
        }
        Ok(())
    }

    pub fn window_config(&self) -> Result<WindowConfig, ConfigError> {
        let WindowSection {
            slices,
            duration_hours,
            remap_offset,
        } = self.window;
        Ok(WindowConfig::new(slices, duration_hours, remap_offset)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use sunspot_core::error::ConfigErrorKind;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = SunspotConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, SunspotConfig::default());
        assert_eq!(cfg.window_config().unwrap(), WindowConfig::default());
        assert_eq!(cfg.source.limit, 1000);
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn parses_all_sections() {
        let cfg = SunspotConfig::from_toml_str(
            r#"
            [window]
            slices = 4
            duration_hours = 12
            remap_offset = 1

            [source]
            rpc_url = "http://127.0.0.1:8899"
            limit = 250
            timeout_secs = 5
            "#,
        )
        .unwrap();
        let window = cfg.window_config().unwrap();
        assert_eq!(window.slices(), 4);
        assert_eq!(window.slice_hours(), 6);
        assert_eq!(cfg.source.rpc_url.as_deref(), Some("http://127.0.0.1:8899"));
        assert_eq!(cfg.source.limit, 250);
        assert_eq!(cfg.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_uneven_slices_at_load_time() {
        let err = SunspotConfig::from_toml_str("[window]\nslices = 7\n").unwrap_err();
        match err {
            ConfigError::Window(sunspot_core::Error::Config(kind)) => {
                assert_eq!(kind, ConfigErrorKind::SlicesUneven(7))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_source_values() {
        assert!(matches!(
            SunspotConfig::from_toml_str("[source]\nlimit = 5000\n"),
            Err(ConfigError::LimitOutOfRange { limit: 5000, .. })
        ));
        assert!(matches!(
            SunspotConfig::from_toml_str("[source]\ntimeout_secs = 0\n"),
            Err(ConfigError::TimeoutZero)
        ));
        assert!(matches!(
            SunspotConfig::from_toml_str("[window]\nslices = \"eight\"\n"),
            Err(ConfigError::TomlDe(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\nduration_hours = 9").unwrap();
        let cfg = SunspotConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.window.duration_hours, 9);
        assert_eq!(cfg.window.slices, 8);
        assert_eq!(SunspotConfig::load(None).unwrap(), SunspotConfig::default());
    }
}
