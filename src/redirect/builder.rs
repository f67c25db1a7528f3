//! Building redirect URIs for the current runtime context.

use tracing::debug;
use url::Url;

use crate::error::AuthLinkError;
use crate::scheme::{validate_scheme, CALLBACK_PATH, DEV_PROXY_SCHEME, DEV_PROXY_SEPARATOR, SCHEME};
use crate::types::AppEnvironment;

/// Capability that turns a scheme and a path into a redirect URI.
pub trait RedirectUriBuilder {
    /// Compose a redirect URI that routes `path` back into the app registered for `scheme`.
    fn build_redirect_uri(&self, scheme: &str, path: &str) -> Result<String, AuthLinkError>;
}

impl<T: RedirectUriBuilder + ?Sized> RedirectUriBuilder for &T {
    fn build_redirect_uri(&self, scheme: &str, path: &str) -> Result<String, AuthLinkError> {
        (**self).build_redirect_uri(scheme, path)
    }
}

/// Redirect URI builder that picks the URI form from an [`AppEnvironment`].
///
/// - `Standalone`: `{scheme}://{path}`
/// - `DevelopmentClient`: `exp://{host}/--/{path}` (the app scheme is not used)
/// - `Web`: `{origin}/{path}`; the origin must be a bare `scheme://host[:port]`
///
/// An empty path is rejected.
///
/// # Examples
///
/// ```
/// use optimal_redirect::{AppEnvironment, PlatformRedirectBuilder, RedirectUriBuilder};
///
/// let standalone = PlatformRedirectBuilder::new(AppEnvironment::Standalone);
/// assert_eq!(
///     standalone.build_redirect_uri("optimal", "auth/callback").unwrap(),
///     "optimal://auth/callback"
/// );
///
/// let dev = PlatformRedirectBuilder::new(AppEnvironment::DevelopmentClient {
///     host: "127.0.0.1:8081".to_string(),
/// });
/// assert_eq!(
///     dev.build_redirect_uri("optimal", "auth/callback").unwrap(),
///     "exp://127.0.0.1:8081/--/auth/callback"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformRedirectBuilder {
    environment: AppEnvironment,
}

impl PlatformRedirectBuilder {
    /// Create a builder targeting `environment`.
    pub fn new(environment: AppEnvironment) -> Self {
        Self { environment }
    }
}

impl RedirectUriBuilder for PlatformRedirectBuilder {
    fn build_redirect_uri(&self, scheme: &str, path: &str) -> Result<String, AuthLinkError> {
        validate_scheme(scheme)?;
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Err(AuthLinkError::EmptyPath);
        }

        let uri = match &self.environment {
            AppEnvironment::Standalone => format!("{scheme}://{path}"),
            AppEnvironment::DevelopmentClient { host } => {
                let host = host.trim().trim_end_matches('/');
                if host.is_empty() {
                    return Err(AuthLinkError::MissingHost);
                }
                format!("{DEV_PROXY_SCHEME}://{host}/{DEV_PROXY_SEPARATOR}/{path}")
            }
            AppEnvironment::Web { origin } => {
                let origin = origin.trim();
                if origin.is_empty() {
                    return Err(AuthLinkError::MissingOrigin);
                }
                let base = Url::parse(origin)?;
                let bare = matches!(base.path(), "" | "/")
                    && base.query().is_none()
                    && base.fragment().is_none();
                if !bare {
                    return Err(AuthLinkError::InvalidOrigin(origin.to_string()));
                }
                base.join(path)?.to_string()
            }
        };

        // Must be usable as an absolute redirect target
        Url::parse(&uri)?;

        debug!(environment = ?self.environment, %uri, "built redirect uri");
        Ok(uri)
    }
}

/// Build the application's OAuth redirect URI from [`SCHEME`] and [`CALLBACK_PATH`].
pub fn make_redirect_uri<B: RedirectUriBuilder + ?Sized>(builder: &B) -> Result<String, AuthLinkError> {
    builder.build_redirect_uri(SCHEME, CALLBACK_PATH)
}
