use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for a warehouse.
///
/// Loaded from an optional TOML file. Every field has a default, so an empty
/// (versioned) file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The file the inventory is persisted to.
    ///
    /// Relative paths are resolved against the directory the configuration
    /// was loaded from.
    data_file: PathBuf,

    /// How many transactions the history view shows.
    history_limit: usize,

    /// Symbol printed before prices, e.g. `$`.
    ///
    /// Empty by default. Only affects display; the data file stores bare
    /// numbers.
    currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            history_limit: default_history_limit(),
            currency_symbol: String::new(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The configured data file, as written in the configuration.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Replaces the data file.
    pub fn set_data_file(&mut self, path: PathBuf) {
        self.data_file = path;
    }

    /// Number of transactions to show in the history view.
    #[must_use]
    pub const fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Prefix for displayed prices.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("inventory.csv")
}

const fn default_history_limit() -> usize {
    10
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_file")]
        data_file: PathBuf,

        #[serde(default = "default_history_limit")]
        history_limit: usize,

        #[serde(default, skip_serializing_if = "String::is_empty")]
        currency_symbol: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_file,
                history_limit,
                currency_symbol,
            } => Self {
                data_file,
                history_limit,
                currency_symbol,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_file: config.data_file,
            history_limit: config.history_limit,
            currency_symbol: config.currency_symbol,
        }
    }
}
