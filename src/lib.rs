//! optimal-redirect - OAuth redirect URI and callback code helpers
//!
//! This crate defines the `optimal://` application scheme, builds the OAuth
//! redirect URI the app registers with an authorization server, and pulls the
//! authorization `code` back out of the URL the app is reopened with.
//!
//! # Quick Start
//!
//! ```
//! use optimal_redirect::{extract_code, make_redirect_uri, PlatformRedirectBuilder};
//!
//! // Redirect URI for a standalone build
//! let uri = make_redirect_uri(&PlatformRedirectBuilder::default())?;
//! assert_eq!(uri, "optimal://auth/callback");
//!
//! // Authorization code from the callback
//! let code = extract_code("optimal://auth/callback?code=abc&state=xyz")?;
//! assert_eq!(code.as_deref(), Some("abc"));
//! # Ok::<(), optimal_redirect::AuthLinkError>(())
//! ```
//!
//! # Capabilities
//!
//! Both halves sit behind a trait so callers and tests can substitute them:
//!
//! | Trait                | Production implementation   | Purpose                        |
//! |----------------------|-----------------------------|--------------------------------|
//! | `RedirectUriBuilder` | `PlatformRedirectBuilder`   | scheme + path → redirect URI   |
//! | `QueryParser`        | `UrlParser`                 | URL string → `ParsedUrl`       |
//!
//! # Redirect URI forms
//!
//! - Standalone build: `optimal://auth/callback`
//! - Development client: `exp://{host}/--/auth/callback`
//! - Web: `{origin}/auth/callback`
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, AuthLinkError>`. A missing `code`
//! parameter is not an error; it is `Ok(None)`.

// Re-export constants
pub use scheme::{validate_scheme, CALLBACK_PATH, DEV_PROXY_SCHEME, DEV_PROXY_SEPARATOR, SCHEME};

// Re-export redirect construction
pub use redirect::{make_redirect_uri, redirect_uri, PlatformRedirectBuilder, RedirectUriBuilder};

// Re-export callback parsing
pub use link::{
    extract_code, extract_code_with, extract_query_value_with, query_value_as_string,
    QueryParser, UrlParser, CODE_PARAM,
};

// Re-export public types
pub use config::RedirectConfig;
pub use error::AuthLinkError;
pub use types::{AppEnvironment, ParsedUrl, QueryParams, QueryValue};

// Module declarations
pub mod config;
pub mod error;
pub mod link;
pub mod redirect;
pub mod scheme;
pub mod types;
