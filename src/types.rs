//! Core data structures shared by the redirect builder and the callback parser.

use serde::Deserialize;
use std::collections::hash_map::{self, HashMap};

/// The parsed shape of a single query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// The name appeared exactly once.
    Single(String),
    /// The name appeared more than once; values are kept in order of appearance.
    Multiple(Vec<String>),
}

impl QueryValue {
    /// First value in order of appearance.
    pub fn first(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// All values in order of appearance.
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(value) => vec![value.as_str()],
            QueryValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(existing) => {
                let first = std::mem::take(existing);
                *self = QueryValue::Multiple(vec![first, value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }
}

/// Mapping from query parameter name to its parsed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, QueryValue>,
}

impl QueryParams {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `name=value` pair. A repeated name turns into [`QueryValue::Multiple`].
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.params.entry(name.into()) {
            hash_map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
            hash_map::Entry::Vacant(entry) => {
                entry.insert(QueryValue::Single(value));
            }
        }
    }

    /// Value recorded for `name`. Names are case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use optimal_redirect::{QueryParams, QueryValue};
    ///
    /// let params: QueryParams = vec![("code", "abc")].into_iter().collect();
    /// assert_eq!(params.get("code"), Some(&QueryValue::Single("abc".to_string())));
    /// assert_eq!(params.get("CODE"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params.get(name)
    }

    /// Whether `name` appeared at least once.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no names were recorded.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}

/// Structural components of a parsed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// URL scheme (optimal, exp, https)
    pub scheme: String,
    /// Host if present (for `optimal://auth/callback` this is `auth`)
    pub host: Option<String>,
    /// Path component (`/callback`)
    pub path: String,
    /// Query parameters, or `None` when the URL has no query component at all
    pub query_params: Option<QueryParams>,
}

/// The runtime context a redirect URI is built for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppEnvironment {
    /// A standalone build that owns its custom scheme.
    #[default]
    Standalone,
    /// Running inside a host development client, reached through its proxy scheme.
    DevelopmentClient {
        /// `host[:port]` of the development server, e.g. `127.0.0.1:8081`
        host: String,
    },
    /// Running in a browser; redirects go back to the serving origin.
    Web {
        /// Origin such as `https://app.example.com`
        origin: String,
    },
}
