use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://photon.komoot.io";
pub const DEFAULT_LANG: &str = "de";
pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_UNNAMED_LABEL: &str = "Unbenannt";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub photon: PhotonConfig,
}

/// Settings for talking to a Photon instance.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PhotonConfig {
    pub base_url: String,
    /// Language tag sent with every request
    pub lang: String,
    /// Result count used when a request does not set one
    pub default_limit: u32,
    /// Name given to places without any name-bearing field
    pub unnamed_label: String,
    pub user_agent: String,
}

impl Default for PhotonConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            default_limit: DEFAULT_LIMIT,
            unnamed_label: DEFAULT_UNNAMED_LABEL.to_string(),
            user_agent: concat!("sunwalk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.photon.base_url, "https://photon.komoot.io");
        assert_eq!(config.photon.lang, "de");
        assert_eq!(config.photon.default_limit, 10);
        assert_eq!(config.photon.unnamed_label, "Unbenannt");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[photon]\nbase_url = \"http://localhost:2322\"\nlang = \"en\"\nunnamed_label = \"Unnamed\""
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.photon.base_url, "http://localhost:2322");
        assert_eq!(config.photon.lang, "en");
        assert_eq!(config.photon.unnamed_label, "Unnamed");
        // Unset keys keep their defaults
        assert_eq!(config.photon.default_limit, 10);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.photon.lang, "de");
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from_file("/nonexistent/sunwalk.toml").is_err());
    }
}
