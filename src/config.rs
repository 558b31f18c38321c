use crate::api::client::{AUR_RPC_URL, AUR_SEARCH_URL};
use crate::api::query::{DEFAULT_PER_PAGE, SortBy, SortOrder};
use crate::error::{PurError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "PUR";
const HOME_ENV: &str = "PUR_HOME";
const DEFAULT_HOME_DIR: &str = ".pur";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PurConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub search: SearchDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            rpc_url: default_rpc_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values used when the corresponding command-line flag is not given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDefaults {
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

fn default_search_url() -> String {
    AUR_SEARCH_URL.to_string()
}

fn default_rpc_url() -> String {
    AUR_RPC_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Directory holding `config.toml`: `$PUR_HOME`, else `~/.pur`.
pub fn pur_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| {
            PurError::ConfigError(format!(
                "Could not determine home directory; set {HOME_ENV}"
            ))
        })
}

/// Load configuration from the default location and the environment.
pub fn new_pur_config() -> Result<PurConfig> {
    PurConfig::load(&pur_home()?)
}

impl PurConfig {
    /// Layer `config.toml` from `pur_home` (if present) and `PUR_*` environment
    /// variables over the built-in defaults.
    pub fn load(pur_home: &Path) -> Result<Self> {
        let config_path = pur_home.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }

        let settings = config::Config::builder()
            .add_source(
                config::File::from(config_path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| PurError::ConfigError(format!("Failed to read config: {e}")))?;

        settings
            .try_deserialize()
            .map_err(|e| PurError::ConfigError(format!("Failed to parse config.toml: {e}")))
    }
}
