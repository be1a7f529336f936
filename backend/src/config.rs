//! # Farm Config
//!
//! Server settings kept in `farm_config.yaml` at the root of the data
//! directory. The file is written with defaults the first time the server
//! starts, and any field missing from an existing file takes its default.
//!
//! ```yaml
//! bind_address: "127.0.0.1:3000"
//! cors_origin: "http://localhost:8080"
//! seed_sample_data: true
//! login_delay_ms: 1000
//! login_password: "admin"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::DEFAULT_PASSWORD;

pub const CONFIG_FILE_NAME: &str = "farm_config.yaml";
pub const DATA_DIR_ENV: &str = "FARM_DASHBOARD_DATA_DIR";
const DEFAULT_DATA_DIR_NAME: &str = "Farm Dashboard";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    /// Address the REST server listens on
    pub bind_address: String,
    /// Origin the frontend is served from
    pub cors_origin: String,
    /// Start cattle, expenses, income and milk lists with the sample records
    pub seed_sample_data: bool,
    pub login_delay_ms: u64,
    pub login_password: String,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            cors_origin: "http://localhost:8080".to_string(),
            seed_sample_data: true,
            login_delay_ms: 1000,
            login_password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl FarmConfig {
    pub fn path(data_directory: &Path) -> PathBuf {
        data_directory.join(CONFIG_FILE_NAME)
    }

    /// Load the config from the data directory, creating it with defaults
    /// if it does not exist yet
    pub fn load_or_create(data_directory: &Path) -> Result<Self> {
        let config_path = Self::path(data_directory);

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {:?}", config_path))?;
            let config: FarmConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Failed to parse {:?}", config_path))?;
            debug!("Loaded farm config from {:?}", config_path);
            Ok(config)
        } else {
            let config = FarmConfig::default();
            config.save(data_directory)?;
            info!("Created default farm config at {:?}", config_path);
            Ok(config)
        }
    }

    pub fn save(&self, data_directory: &Path) -> Result<()> {
        if !data_directory.exists() {
            fs::create_dir_all(data_directory)?;
            info!("Created data directory: {:?}", data_directory);
        }

        let config_path = Self::path(data_directory);
        let yaml_content = serde_yaml::to_string(self)?;

        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved farm config to {:?}", config_path);
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

/// The data directory: `$FARM_DASHBOARD_DATA_DIR` when set, otherwise
/// `~/Documents/Farm Dashboard`
pub fn data_directory() -> Result<PathBuf> {
    data_directory_from(std::env::var(DATA_DIR_ENV).ok())
}

fn data_directory_from(override_dir: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|dir| !dir.trim().is_empty()) {
        info!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
        return Ok(PathBuf::from(dir));
    }

    let documents = dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .context("Could not determine home directory")?;

    Ok(documents.join(DEFAULT_DATA_DIR_NAME))
}
