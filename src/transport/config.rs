//! Transport configuration.

use std::time::Duration;

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Prefix for relative form URLs such as `/dogs`.
    pub base_url: Option<String>,
    /// The timeout applied to a whole request.
    pub timeout: Duration,
    /// The User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: concat!("formsubmit-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Create a configuration that resolves relative URLs against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    /// Resolve a form URL against the configured base URL.
    ///
    /// Absolute `http`/`https` URLs are returned unchanged.
    pub fn resolve_url(&self, url: &str) -> String {
        let absolute = url.starts_with("http://") || url.starts_with("https://");

        match &self.base_url {
            Some(base) if !absolute => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url.to_string(),
        }
    }
}
