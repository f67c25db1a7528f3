//! Error types for redirect URI construction and callback URL parsing.

use thiserror::Error;

/// Errors that can occur while building a redirect URI or parsing a callback URL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthLinkError {
    /// The scheme is not a valid RFC 3986 scheme.
    #[error("Invalid scheme: {0:?}")]
    InvalidScheme(String),

    /// A development client environment was selected without a host.
    #[error("Development client environment requires a host")]
    MissingHost,

    /// A web environment was selected without an origin.
    #[error("Web environment requires an origin")]
    MissingOrigin,

    /// A web origin carries a path, query or fragment.
    #[error("Web origin must not have a path, query or fragment: {0}")]
    InvalidOrigin(String),

    /// The redirect path is empty.
    #[error("Redirect path must not be empty")]
    EmptyPath,

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// The redirect configuration could not be loaded.
    #[error("Invalid redirect configuration: {0}")]
    ConfigError(String),
}

impl From<url::ParseError> for AuthLinkError {
    fn from(err: url::ParseError) -> Self {
        AuthLinkError::UrlParseError(err.to_string())
    }
}

impl From<toml::de::Error> for AuthLinkError {
    fn from(err: toml::de::Error) -> Self {
        AuthLinkError::ConfigError(err.to_string())
    }
}
