//! Redirect configuration.
//!
//! Only the target environment is configurable; the scheme and callback path
//! are fixed at build time.

use serde::Deserialize;
use std::path::Path;

use crate::error::AuthLinkError;
use crate::types::AppEnvironment;

/// Selects the environment kind: `standalone`, `development` or `web`.
pub const ENV_APP_ENV: &str = "OPTIMAL_APP_ENV";
/// Development server `host[:port]` used when the kind is `development`.
pub const ENV_DEV_HOST: &str = "OPTIMAL_DEV_HOST";
/// Serving origin used when the kind is `web`.
pub const ENV_WEB_ORIGIN: &str = "OPTIMAL_WEB_ORIGIN";

/// Where redirect URIs are built for. Defaults to a standalone build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Target runtime context
    pub environment: AppEnvironment,
}

impl RedirectConfig {
    /// Parse a TOML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimal_redirect::{AppEnvironment, RedirectConfig};
    ///
    /// let config = RedirectConfig::from_toml_str(r#"
    ///     [environment]
    ///     kind = "web"
    ///     origin = "https://app.example.com"
    /// "#).unwrap();
    /// assert_eq!(
    ///     config.environment,
    ///     AppEnvironment::Web { origin: "https://app.example.com".to_string() }
    /// );
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, AuthLinkError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AuthLinkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AuthLinkError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, AuthLinkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthLinkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let kind = non_empty(ENV_APP_ENV).map(|v| v.trim().to_ascii_lowercase());
        let environment = match kind.as_deref() {
            None | Some("standalone") => AppEnvironment::Standalone,
            Some("development") | Some("development_client") => AppEnvironment::DevelopmentClient {
                host: non_empty(ENV_DEV_HOST).ok_or_else(|| {
                    AuthLinkError::ConfigError(format!("{ENV_DEV_HOST} must be set for a development environment"))
                })?,
            },
            Some("web") => AppEnvironment::Web {
                origin: non_empty(ENV_WEB_ORIGIN).ok_or_else(|| {
                    AuthLinkError::ConfigError(format!("{ENV_WEB_ORIGIN} must be set for a web environment"))
                })?,
            },
            Some(other) => {
                return Err(AuthLinkError::ConfigError(format!(
                    "unknown {ENV_APP_ENV} '{other}', expected standalone, development or web"
                )))
            }
        };

        Ok(Self { environment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_standalone() {
        let config = RedirectConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.environment, AppEnvironment::Standalone);

        let blank = RedirectConfig::from_lookup(lookup(&[(ENV_APP_ENV, " ")])).unwrap();
        assert_eq!(blank.environment, AppEnvironment::Standalone);
    }

    #[test]
    fn test_development_from_env() {
        let config = RedirectConfig::from_lookup(lookup(&[
            (ENV_APP_ENV, "Development"),
            (ENV_DEV_HOST, "10.0.0.2:8081"),
        ]))
        .unwrap();
        assert_eq!(
            config.environment,
            AppEnvironment::DevelopmentClient { host: "10.0.0.2:8081".to_string() }
        );
    }

    #[test]
    fn test_web_requires_origin() {
        let err = RedirectConfig::from_lookup(lookup(&[(ENV_APP_ENV, "web")])).unwrap_err();
        assert!(matches!(err, AuthLinkError::ConfigError(msg) if msg.contains(ENV_WEB_ORIGIN)));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = RedirectConfig::from_lookup(lookup(&[(ENV_APP_ENV, "staging")])).unwrap_err();
        assert!(matches!(err, AuthLinkError::ConfigError(msg) if msg.contains("staging")));
    }

    #[test]
    fn test_toml_development_client() {
        let config = RedirectConfig::from_toml_str(
            r#"
            [environment]
            kind = "development_client"
            host = "127.0.0.1:8081"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.environment,
            AppEnvironment::DevelopmentClient { host: "127.0.0.1:8081".to_string() }
        );
    }

    #[test]
    fn test_toml_empty_document() {
        let config = RedirectConfig::from_toml_str("").unwrap();
        assert_eq!(config, RedirectConfig::default());
    }

    #[test]
    fn test_toml_file() {
        let path = std::env::temp_dir().join(format!("optimal-redirect-{}.toml", std::process::id()));
        std::fs::write(&path, "[environment]\nkind = \"web\"\norigin = \"http://localhost:8081\"\n").unwrap();

        let config = RedirectConfig::from_toml_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config.unwrap().environment,
            AppEnvironment::Web { origin: "http://localhost:8081".to_string() }
        );
    }

    #[test]
    fn test_toml_file_missing() {
        let result = RedirectConfig::from_toml_file("/nonexistent/optimal-redirect.toml");
        assert!(matches!(result, Err(AuthLinkError::ConfigError(msg)) if msg.contains("optimal-redirect.toml")));
    }

    #[test]
    fn test_toml_unknown_kind() {
        let result = RedirectConfig::from_toml_str("[environment]\nkind = \"staging\"\n");
        assert!(matches!(result, Err(AuthLinkError::ConfigError(_))));
    }
}
