use url::Url;

use crate::net::NetError;

/// Errors returned by [`ResourceFetch`](crate::engine::resource_fetch::ResourceFetch).
#[derive(Debug, thiserror::Error)]
pub enum ResourceFetchError {
    /// The resource answered with a status outside `200..300`. `url` is the requested URL
    /// resolved against the window location.
    #[error("Failed to perform request to \"{url}\". Status code: {status}.")]
    Status { url: Url, status: u16 },

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Net(#[from] NetError),
}

impl ResourceFetchError {
    /// Returns the status code when the error was caused by a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            ResourceFetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
