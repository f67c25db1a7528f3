//! Redirect URI construction.
//!
//! This module contains:
//! - The `RedirectUriBuilder` capability and its platform implementation
//! - The process-wide redirect URI for the application scheme

pub mod builder;
pub mod uri;

// Re-export main functionality
pub use builder::{make_redirect_uri, PlatformRedirectBuilder, RedirectUriBuilder};
pub use uri::redirect_uri;
