//! Network layer.
//!
//! The two request clients a page context uses to load resources live here:
//! [`Fetch`] (asynchronous) and [`XmlHttpRequest`] (synchronous). Both build a
//! [`Request`], apply the frame's identity headers and origin policy, and hand
//! the request to one of the frame's [`transport`]s.

pub mod decode;
pub mod fetch;
pub mod request;
pub mod response;
pub mod transport;
pub mod xhr;

use url::Url;

pub use fetch::{Fetch, FetchOptions};
pub use request::Request;
pub use response::{is_success_status, Response};
pub use transport::{BlockingHttpTransport, BlockingReqwestTransport, HttpTransport, ReqwestTransport};
pub use xhr::{ReadyState, XmlHttpRequest, XmlHttpRequestOptions};

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid HTTP method \"{0}\"")]
    InvalidMethod(String),

    #[error("Cross-origin request to \"{url}\" blocked for document origin \"{origin}\"")]
    CrossOriginBlocked { url: Url, origin: String },

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    #[error("Not supported: {0}")]
    NotSupported(&'static str),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Network error: {0}")]
    Network(String),
}

/// Rejects `target` when it is not same-origin with `location`.
pub(crate) fn check_origin(location: &Url, target: &Url) -> Result<(), NetError> {
    if location.origin() == target.origin() {
        return Ok(());
    }

    Err(NetError::CrossOriginBlocked {
        url: target.clone(),
        origin: location.origin().ascii_serialization(),
    })
}
