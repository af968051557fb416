use config::{Config, ConfigError, Environment, File};
use log::warn;
use serde::Deserialize;

/// Upstream API configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Application ID issued by the recipe API (can be absent; searches will
    /// then fail with an auth error from the server)
    #[serde(default)]
    pub app_id: Option<String>,
    /// Application key issued by the recipe API
    #[serde(default)]
    pub app_key: Option<String>,
    /// Search endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Page-size cap for the first request; the server rejects or silently
    /// caps unbounded `to` values, so we never ask for more than this per page
    #[serde(default = "default_page_chunk")]
    pub page_chunk: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            app_id: None,
            app_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_chunk: default_page_chunk(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.edamam.com/api/recipes/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_page_chunk() -> usize {
    60
}

impl ApiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with EDAMAM_ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: EDAMAM_APP_ID, EDAMAM_APP_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("EDAMAM").try_parsing(true))
            .build()?;

        let config: ApiConfig = settings.try_deserialize()?;

        if !config.has_credentials() {
            warn!(
                "EDAMAM_APP_ID / EDAMAM_APP_KEY not configured; \
                 upstream searches will likely be rejected"
            );
        }

        Ok(config)
    }

    /// True when both credentials are present and non-empty
    pub fn has_credentials(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.app_id) && present(&self.app_key)
    }
}
