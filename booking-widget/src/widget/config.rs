use std::path::Path;

use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config format: {0}")]
    Format(#[from] serde_json::Error),
    #[error("invalid endpoint url {url:?}: {reason}")]
    Endpoint { url: String, reason: String },
    #[error("app_id must not be empty")]
    MissingAppId,
    #[cfg(feature = "http_gateway")]
    #[error("cannot build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

fn default_auto_close_delay() -> u64 {
    3
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Backend action dispatcher every call is POSTed to.
    pub endpoint_url: String,
    /// Application id handed to the identity provider.
    pub app_id: String,
    /// Seconds between a successful submit and closing the in-app window.
    #[serde(default = "default_auto_close_delay")]
    pub auto_close_delay: u64,
    /// Attach a `submissionToken` to create/manage calls.
    #[serde(default)]
    pub submission_tokens: bool,
    #[serde(default)]
    pub seed: u64,
}

impl WidgetConfig {
    pub fn new(endpoint_url: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            app_id: app_id.into(),
            auto_close_delay: default_auto_close_delay(),
            submission_tokens: false,
            seed: 0,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.endpoint_url).map_err(|e| ConfigError::Endpoint {
            url: self.endpoint_url.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Endpoint {
                url: self.endpoint_url.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::MissingAppId);
        }
        Ok(())
    }
}
