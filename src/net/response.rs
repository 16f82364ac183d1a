//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by a
//! transport. It contains the final URL (after redirects, if the client
//! follows them), status code + reason, response headers, and the raw body bytes.
//!
//! ## Notes
//! - Use [`Response::ok`] for the success check; it shares [`is_success_status`]
//!   with the synchronous path.
//! - [`Response::text`] decodes the body honoring the `Content-Type` charset.
//! - `status_text` is derived from the status code's canonical reason phrase
//!   and is `"Unknown"` for non-standard codes.
//!
use http::{HeaderMap, StatusCode};

use crate::net::decode::decode_response_body;

/// Returns true for status codes in the success range `200..300`.
#[inline]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Simple structure for HTTP responses.
///
/// All fields reflect the **received** response as-is; no additional parsing
/// or transformation is performed by this type.
#[derive(Debug, Clone)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(url: url::Url, status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            url,
            status,
            status_text: status_text_for(status),
            headers,
            body,
        }
    }

    /// True when the status is in the success range.
    pub fn ok(&self) -> bool {
        is_success_status(self.status)
    }

    /// Decodes the body into text.
    pub async fn text(self) -> String {
        decode_response_body(&self.headers, &self.body)
    }
}

pub(crate) fn status_text_for(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
        .to_string()
}
