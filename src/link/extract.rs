//! Extracting the authorization code from a callback URL.

use tracing::debug;

use crate::error::AuthLinkError;
use crate::link::parser::{QueryParser, UrlParser};
use crate::types::QueryValue;

/// Name of the query parameter carrying the authorization code.
pub const CODE_PARAM: &str = "code";

/// Reduce a parsed query value to a single string.
///
/// - absent → `None`
/// - a single value → that value
/// - repeated values → the first one, in order of appearance
///
/// # Examples
///
/// ```
/// use optimal_redirect::{query_value_as_string, QueryValue};
///
/// assert_eq!(query_value_as_string(None), None);
/// assert_eq!(
///     query_value_as_string(Some(&QueryValue::Single("abc".to_string()))),
///     Some("abc".to_string())
/// );
/// assert_eq!(
///     query_value_as_string(Some(&QueryValue::Multiple(vec!["a".into(), "b".into()]))),
///     Some("a".to_string())
/// );
/// ```
pub fn query_value_as_string(value: Option<&QueryValue>) -> Option<String> {
    value.and_then(QueryValue::first).map(str::to_string)
}

/// Look up `key` in the query of `url` using `parser`.
///
/// Returns `Ok(None)` when the URL has no query or the key is missing.
/// Parse failures are returned unchanged.
pub fn extract_query_value_with<P: QueryParser + ?Sized>(
    parser: &P,
    url: &str,
    key: &str,
) -> Result<Option<String>, AuthLinkError> {
    let parsed = parser.parse_url(url)?;
    let value = query_value_as_string(parsed.query_params.as_ref().and_then(|params| params.get(key)));

    debug!(key, found = value.is_some(), "query lookup");
    Ok(value)
}

/// Extract the `code` query parameter from `url` using `parser`.
pub fn extract_code_with<P: QueryParser + ?Sized>(
    parser: &P,
    url: &str,
) -> Result<Option<String>, AuthLinkError> {
    extract_query_value_with(parser, url, CODE_PARAM)
}

/// Extract the `code` query parameter from a callback URL.
///
/// An empty value (`?code=`) yields `Some("")`, which is distinct from a
/// missing parameter.
///
/// # Examples
///
/// ```
/// use optimal_redirect::extract_code;
///
/// let code = extract_code("optimal://auth/callback?code=abc&state=xyz").unwrap();
/// assert_eq!(code, Some("abc".to_string()));
///
/// let missing = extract_code("optimal://auth/callback?state=xyz").unwrap();
/// assert_eq!(missing, None);
///
/// let empty = extract_code("optimal://auth/callback?code=").unwrap();
/// assert_eq!(empty, Some(String::new()));
/// ```
pub fn extract_code(url: &str) -> Result<Option<String>, AuthLinkError> {
    extract_code_with(&UrlParser, url)
}
