//! Application URI scheme and callback path.

use crate::error::AuthLinkError;

/// Custom URI scheme registered by the application.
pub const SCHEME: &str = "optimal";

/// Path the authorization server redirects back to.
pub const CALLBACK_PATH: &str = "auth/callback";

/// Scheme used by the development client's proxy.
pub const DEV_PROXY_SCHEME: &str = "exp";

/// Separates the development server address from the app path in proxy URIs.
pub const DEV_PROXY_SEPARATOR: &str = "--";

/// Check that `scheme` follows RFC 3986: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
///
/// # Examples
///
/// ```
/// use optimal_redirect::validate_scheme;
///
/// assert!(validate_scheme("optimal").is_ok());
/// assert!(validate_scheme("com.example+app").is_ok());
/// assert!(validate_scheme("9lives").is_err());
/// ```
pub fn validate_scheme(scheme: &str) -> Result<(), AuthLinkError> {
    let mut chars = scheme.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AuthLinkError::InvalidScheme(scheme.to_string()))
    }
}
