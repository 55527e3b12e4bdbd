//! Loading `ServerConfig` from environment variables

use super::types::ServerConfig;
use crate::error::{Result, StorybookError};
use crate::props::PropFilter;

/// Required: Storybook base URL
pub const ENV_STORYBOOK_URL: &str = "STORYBOOK_URL";
/// Optional: HTTP listen port
pub const ENV_PORT: &str = "PORT";
/// Optional: bind address
pub const ENV_BIND: &str = "STORYBOOK_BIND";
/// Optional: `false`/`0`/`no` runs Chrome with a visible window
pub const ENV_HEADLESS: &str = "STORYBOOK_HEADLESS";
/// Optional: `lenient` (default) or `strict`
pub const ENV_PROP_FILTER: &str = "STORYBOOK_PROP_FILTER";

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `StorybookError::Config` when `STORYBOOK_URL` is missing or any
    /// variable holds an unparseable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_STORYBOOK_URL)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                StorybookError::Config(format!(
                    "{ENV_STORYBOOK_URL} is not set; point it at the Storybook site, e.g. http://localhost:6006"
                ))
            })?;

        let mut builder = ServerConfig::builder().storybook_url(url);

        if let Some(port) = lookup(ENV_PORT) {
            let port = port.trim().parse::<u16>().map_err(|e| {
                StorybookError::Config(format!("{ENV_PORT}='{port}' is not a valid port: {e}"))
            })?;
            builder = builder.port(port);
        }

        if let Some(bind) = lookup(ENV_BIND) {
            builder = builder.bind_address(bind.trim());
        }

        if let Some(headless) = lookup(ENV_HEADLESS) {
            builder = builder.headless(parse_flag(&headless));
        }

        if let Some(filter) = lookup(ENV_PROP_FILTER) {
            let filter = filter
                .parse::<PropFilter>()
                .map_err(|e| StorybookError::Config(format!("{ENV_PROP_FILTER}: {e}")))?;
            builder = builder.prop_filter(filter);
        }

        builder.build()
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_url_is_a_config_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, StorybookError::Config(_)));
        assert!(err.to_string().contains(ENV_STORYBOOK_URL));
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[(ENV_STORYBOOK_URL, "http://localhost:6006/")]))
                .unwrap();
        assert_eq!(config.storybook_url(), "http://localhost:6006");
        assert_eq!(config.port(), 3000);
        assert!(config.headless());
        assert_eq!(config.prop_filter(), PropFilter::Lenient);
    }

    #[test]
    fn optional_variables_are_honored() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_STORYBOOK_URL, "https://design.example.com"),
            (ENV_PORT, "8080"),
            (ENV_BIND, "127.0.0.1"),
            (ENV_HEADLESS, "false"),
            (ENV_PROP_FILTER, "strict"),
        ]))
        .unwrap();
        assert_eq!(config.port(), 8080);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert!(!config.headless());
        assert_eq!(config.prop_filter(), PropFilter::Strict);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[
            (ENV_STORYBOOK_URL, "http://localhost:6006"),
            (ENV_PORT, "http"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[(ENV_STORYBOOK_URL, "localhost:6006")]))
            .unwrap_err();
        assert!(matches!(err, StorybookError::Config(_)));
    }
}
