//! Decomposing URL strings into their structural parts.

use tracing::trace;
use url::Url;

use crate::error::AuthLinkError;
use crate::types::{ParsedUrl, QueryParams};

/// Capability that parses a URL string into a [`ParsedUrl`].
pub trait QueryParser {
    /// Split `url` into scheme, host, path and query parameters.
    fn parse_url(&self, url: &str) -> Result<ParsedUrl, AuthLinkError>;
}

impl<T: QueryParser + ?Sized> QueryParser for &T {
    fn parse_url(&self, url: &str) -> Result<ParsedUrl, AuthLinkError> {
        (**self).parse_url(url)
    }
}

/// [`QueryParser`] backed by the `url` crate.
///
/// Names and values are percent-decoded and `+` becomes a space. A name that
/// appears more than once is kept as [`QueryValue::Multiple`](crate::QueryValue::Multiple).
/// Input that is not an absolute URL is rejected with [`AuthLinkError::UrlParseError`].
///
/// # Examples
///
/// ```
/// use optimal_redirect::{QueryParser, UrlParser};
///
/// let parsed = UrlParser.parse_url("optimal://auth/callback?code=abc").unwrap();
/// assert_eq!(parsed.scheme, "optimal");
/// assert_eq!(parsed.host.as_deref(), Some("auth"));
/// assert_eq!(parsed.path, "/callback");
/// assert!(parsed.query_params.unwrap().contains("code"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlParser;

impl QueryParser for UrlParser {
    fn parse_url(&self, url: &str) -> Result<ParsedUrl, AuthLinkError> {
        let parsed = Url::parse(url)?;

        let query_params = parsed.query().map(|_| {
            parsed
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect::<QueryParams>()
        });

        trace!(
            scheme = parsed.scheme(),
            params = query_params.as_ref().map_or(0, QueryParams::len),
            "parsed url"
        );

        Ok(ParsedUrl {
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().map(|h| h.to_string()),
            path: parsed.path().to_string(),
            query_params,
        })
    }
}
