//! Credential and tuning configuration, loaded from the environment first
//! and a JSON config file second.

use crate::error::Result;
use crate::session::Credentials;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_DISC_PAD_SIZE: f64 = 1.6;

const ENV_CLIENT_ID: &str = "DIGIKEY_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "DIGIKEY_CLIENT_SECRET";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "DIGIKEY_CLIENT_ID", default)]
    pub client_id: String,
    #[serde(rename = "DIGIKEY_CLIENT_SECRET", default)]
    pub client_secret: String,
    #[serde(rename = "TH_DISC_CAP_PAD_SIZE", default = "default_disc_pad_size")]
    pub disc_pad_size: f64,
}

fn default_disc_pad_size() -> f64 {
    DEFAULT_DISC_PAD_SIZE
}

impl Config {
    /// Reads the config file, then lets environment variables override the
    /// credentials it carries. A missing file is not an error; missing
    /// credentials are the caller's problem to prompt for.
    pub fn load(path: &Path) -> Result<Config> {
        let mut config = if path.exists() {
            serde_json::from_str(&fs::read_to_string(path)?)?
        } else {
            Config {
                disc_pad_size: DEFAULT_DISC_PAD_SIZE,
                ..Config::default()
            }
        };
        if let Ok(id) = std::env::var(ENV_CLIENT_ID) {
            config.client_id = id;
        }
        if let Ok(secret) = std::env::var(ENV_CLIENT_SECRET) {
            config.client_secret = secret;
        }
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.disc_pad_size, DEFAULT_DISC_PAD_SIZE);
    }

    #[test]
    fn round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            disc_pad_size: 1.8,
        };
        config.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("DIGIKEY_CLIENT_ID"));
        assert!(raw.contains("TH_DISC_CAP_PAD_SIZE"));

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.disc_pad_size, 1.8);
        assert!(loaded.has_credentials());
    }

    #[test]
    fn pad_size_defaults_when_absent_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"DIGIKEY_CLIENT_ID": "id"}"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.disc_pad_size, DEFAULT_DISC_PAD_SIZE);
    }
}
