use crate::patient::DEFAULT_ID_PREFIX;
use crate::record::Record;
use crate::seed;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(skip)]
    path: Option<String>,
    /// Prefix for generated patient IDs.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    /// Whether to load history records at start-up.
    #[serde(default = "default_true")]
    pub seed_history: bool,
    /// Records to seed instead of the built-in ones.
    #[serde(default)]
    pub history: Vec<Record>,
    /// Patients already waiting when the app starts.
    #[serde(default)]
    pub patients: Vec<PatientConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PatientConfig {
    pub name: String,
    #[serde(default)]
    pub reason: String,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            id_prefix: default_id_prefix(),
            seed_history: true,
            history: Vec::new(),
            patients: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the specified path, the default config dir (~/.config/clinicq/) or a local .clinicq.toml.
    pub fn load(path: &Option<String>) -> Self {
        let config_path = if let Some(p) = path {
            PathBuf::from(p)
        } else {
            Self::default_config_path()
        };
        Self::load_from_path(&config_path)
    }

    fn load_from_path(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", config_path, e);
                return Self::default();
            }
        };

        match Self::parse(&content) {
            Ok(mut config) => {
                info!("Loaded config from {:?}", config_path);
                config.path = config_path.to_str().map(|s| s.to_string());
                config
            }
            Err(e) => {
                warn!("Failed to parse config file {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get the path of the configuration file if it was loaded from a file.
    pub fn get_path(&self) -> Option<&String> {
        self.path.as_ref()
    }

    fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("clinicq").join("config.toml");
            if config_path.exists() {
                return config_path;
            }
        }
        // Fallback to local .clinicq.toml (might not exist)
        PathBuf::from(".clinicq.toml")
    }

    /// Records to load into the history at start-up.
    pub fn seed_records(&self) -> Vec<Record> {
        if !self.seed_history {
            Vec::new()
        } else if self.history.is_empty() {
            seed::default_records()
        } else {
            self.history.clone()
        }
    }
}
