//! The process-wide redirect URI.

use std::sync::OnceLock;
use tracing::debug;

use crate::config::RedirectConfig;
use crate::error::AuthLinkError;
use crate::redirect::builder::{make_redirect_uri, PlatformRedirectBuilder};

static REDIRECT_URI: OnceLock<Result<String, AuthLinkError>> = OnceLock::new();

/// The application's redirect URI, computed once from [`RedirectConfig::from_env`].
///
/// Every call returns the same string. If the first computation fails, that
/// error is returned on every call; the caller should treat it as fatal.
pub fn redirect_uri() -> Result<&'static str, AuthLinkError> {
    REDIRECT_URI
        .get_or_init(|| {
            let config = RedirectConfig::from_env()?;
            let uri = make_redirect_uri(&PlatformRedirectBuilder::new(config.environment))?;
            debug!(%uri, "redirect uri initialized");
            Ok(uri)
        })
        .as_deref()
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_uri_is_stable() {
        let first = redirect_uri();
        let second = redirect_uri();
        assert_eq!(first, second);

        if let (Ok(a), Ok(b)) = (first, second) {
            assert!(std::ptr::eq(a, b));
        }
    }
}
