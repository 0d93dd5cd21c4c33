use anyhow::Result;
use serde::Deserialize;

/// Default location of the optional config file (extension resolved by `config`)
pub const DEFAULT_CONFIG_PATH: &str = "config/plaud-export";

/// Environment prefix for config overrides, e.g. `PLAUD_EXPORT__API__BASE_URL`
pub const ENV_PREFIX: &str = "PLAUD_EXPORT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub endpoints: EndpointConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.plaud.ai".to_string(),
            timeout_secs: 120,
            endpoints: EndpointConfig::default(),
        }
    }
}

/// Endpoint paths relative to `base_url`; `{id}` is replaced by the recording id
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub auth: String,
    pub recordings: String,
    pub tags: String,
    pub audio: String,
    pub transcript: String,
    pub summary: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            auth: "/auth/access-token".to_string(),
            recordings: "/file/simple/web".to_string(),
            tags: "/filetag/".to_string(),
            audio: "/file/download/{id}".to_string(),
            transcript: "/file/export/transcript".to_string(),
            summary: "/file/export/summary".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Used when neither flag nor environment names a directory
    pub directory: Option<String>,
    /// Used when neither flag nor environment sets skip-existing
    pub skip_existing: Option<bool>,
}

impl Config {
    /// Load from an optional file plus `PLAUD_EXPORT__*` environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
