//! Tests for substituting the parser and redirect builder capabilities.

use optimal_redirect::*;

/// Parses `key=value` pairs after the last `?`, ignoring everything else.
struct NaiveParser;

impl QueryParser for NaiveParser {
    fn parse_url(&self, url: &str) -> Result<ParsedUrl, AuthLinkError> {
        let query_params = url.rsplit_once('?').map(|(_, query)| {
            query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
                .collect::<QueryParams>()
        });

        Ok(ParsedUrl {
            scheme: String::new(),
            host: None,
            path: String::new(),
            query_params,
        })
    }
}

/// Always fails, as an unavailable platform capability would.
struct UnavailableBuilder;

impl RedirectUriBuilder for UnavailableBuilder {
    fn build_redirect_uri(&self, _scheme: &str, _path: &str) -> Result<String, AuthLinkError> {
        Err(AuthLinkError::ConfigError("linking unavailable".to_string()))
    }
}

#[test]
fn test_extract_with_custom_parser() {
    // Accepts input the url crate rejects
    assert_eq!(
        extract_code_with(&NaiveParser, "callback?code=abc&state=xyz").unwrap(),
        Some("abc".to_string())
    );
    assert_eq!(extract_code_with(&NaiveParser, "no query here").unwrap(), None);
}

#[test]
fn test_custom_parser_repeated_code() {
    assert_eq!(
        extract_code_with(&NaiveParser, "x?code=1&code=2&code=3").unwrap(),
        Some("1".to_string())
    );
}

#[test]
fn test_parser_as_trait_object() {
    let parsers: Vec<Box<dyn QueryParser>> = vec![Box::new(UrlParser), Box::new(NaiveParser)];

    for parser in &parsers {
        assert_eq!(
            extract_code_with(&**parser, "optimal://auth/callback?code=abc").unwrap(),
            Some("abc".to_string())
        );
    }
}

#[test]
fn test_builder_failure_propagates() {
    assert_eq!(
        make_redirect_uri(&UnavailableBuilder),
        Err(AuthLinkError::ConfigError("linking unavailable".to_string()))
    );
}

#[test]
fn test_builder_from_config() {
    let config = RedirectConfig::from_toml_str(
        r#"
        [environment]
        kind = "development_client"
        host = "10.0.2.2:8081"
        "#,
    )
    .unwrap();

    let builder = PlatformRedirectBuilder::new(config.environment);
    assert_eq!(
        make_redirect_uri(&builder).unwrap(),
        "exp://10.0.2.2:8081/--/auth/callback"
    );
}
