use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub view: ViewConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same origin as the page".
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ViewConfig {
    /// Year preselected by the time series filters.
    pub default_year: String,
    /// How many sales the dashboard lists as recent transactions.
    pub recent_transactions: usize,
    /// Decimal places of the percentage deltas on the dashboard cards.
    pub percent_decimals: u8,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[view]
default_year = "2024"
recent_transactions = 50
percent_decimals = 0
"#;

/// localStorage key that overrides `api.base_url` at runtime.
pub const API_BASE_STORAGE_KEY: &str = "dashboard.api_base";

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            view: ViewConfig {
                default_year: "2024".to_string(),
                recent_transactions: 50,
                percent_decimals: 0,
            },
        }
    }
}

pub fn parse_config(contents: &str) -> Result<DashboardConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Loads the embedded configuration and applies the browser override for the
/// API base URL, if one is stored.
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(base_url) = stored_api_base() {
        log::info!("Using API base URL from localStorage: {}", base_url);
        config.api.base_url = base_url;
    }
    Ok(config)
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(API_BASE_STORAGE_KEY)
        .ok()?
        .filter(|value| !value.trim().is_empty())
}
