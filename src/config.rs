use serde::Deserialize;
use thiserror::Error;

/// Id of the optional `<script type="application/json">` element carrying
/// deployment overrides.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of the JSON API, e.g. `/api`.
    pub api_base: String,
    /// Prefix generated files are served under.
    pub output_base: String,
    pub lyrics_preview_chars: usize,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            output_base: "/output".to_string(),
            lyrics_preview_chars: 300,
            log_level: "debug".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_json::from_str(raw)?;
        config.log_level()?;
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults.
    ///
    /// Runs before the logger exists, so the returned warning is logged by
    /// the caller once logging is up.
    pub fn from_document() -> (Self, Option<ConfigError>) {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }

    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Static URL of a file returned by the generate endpoint.
    pub fn output_url(&self, filename: &str) -> String {
        format!("{}/{}", self.output_base.trim_end_matches('/'), filename)
    }
}
