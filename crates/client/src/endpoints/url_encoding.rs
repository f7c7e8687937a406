//! URL encoding utilities for constructing safe API paths.
//!
//! Provides percent-encoding for URL path segments to handle special characters
//! in hostnames and host aliases that could otherwise cause path traversal or
//! incorrect URL resolution.
//!
//! # Security Considerations
//!
//! Without percent-encoding, special characters in hostnames could:
//! - Cause path traversal (e.g., `web/01` would create a nested path)
//! - Break URL parsing (e.g., `web?01` would create a query parameter)
//! - Cause double-decode issues (e.g., `web%2001` might be decoded prematurely)
//!
//! # Example
//!
//! ```
//! use hostwatch_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("web/01");
//! assert_eq!(encoded, "web%2F01");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus additional characters that have
/// special meaning in Hostwatch REST API paths or could cause issues:
/// - Space, quotes, angle brackets: problematic in URLs
/// - Backslash, pipe, caret, backtick, tilde: often blocked or problematic
/// - Plus, comma, semicolon: can have special meaning in some contexts
/// - Curly braces, square brackets: reserved in URI templates
/// - Percent: must be encoded to prevent double-encoding issues
/// - Slash: must be encoded to prevent path traversal
/// - Question mark and hash: have special URL meaning
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')      // Space
    .add(b'"')      // Double quote
    .add(b'<')      // Less than
    .add(b'>')      // Greater than
    .add(b'`')      // Backtick
    .add(b'{')      // Left curly brace
    .add(b'}')      // Right curly brace
    .add(b'|')      // Pipe
    .add(b'\\')     // Backslash
    .add(b'^')      // Caret
    .add(b'~')      // Tilde
    .add(b'%')      // Percent (prevents double-encoding)
    .add(b'/')      // Forward slash (prevents path traversal)
    .add(b'?')      // Question mark
    .add(b'#')      // Hash
    .add(b'+')      // Plus
    .add(b',')      // Comma
    .add(b';')      // Semicolon
    .add(b'[')      // Left square bracket
    .add(b']'); // Right square bracket

/// Percent-encode a string for safe use as a URL path segment.
///
/// This function should be used for any caller-provided value that will be
/// interpolated into a URL path. For the host endpoints that means hostnames,
/// which are caller input and may carry cloud-provider aliases with characters
/// that are unsafe in a path.
///
/// # Examples
///
/// ```
/// use hostwatch_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("web-01.example.com"), "web-01.example.com");
/// assert_eq!(encode_path_segment("web 01"), "web%2001");
/// assert_eq!(encode_path_segment("web/01"), "web%2F01");
/// assert_eq!(encode_path_segment("web%01"), "web%2501");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
