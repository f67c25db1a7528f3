//! Callback URL parsing and query parameter extraction.
//!
//! This module contains:
//! - The `QueryParser` capability and its `url` crate implementation
//! - Extraction of the authorization `code` from a callback URL

pub mod extract;
pub mod parser;

// Re-export main functionality
pub use extract::{extract_code, extract_code_with, extract_query_value_with, query_value_as_string, CODE_PARAM};
pub use parser::{QueryParser, UrlParser};
