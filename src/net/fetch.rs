use http::Method;

use crate::engine::frame::BrowserFrame;
use crate::engine::window::Window;
use crate::net::{check_origin, NetError, Request, Response};

pub struct FetchOptions<'a> {
    pub frame: &'a BrowserFrame,
    pub window: &'a Window,
    /// Absolute, or relative to the window location.
    pub url: &'a str,
    /// Skip the same-origin check. Only for engine-initiated loads.
    pub disable_cross_origin_policy: bool,
}

/// A single asynchronous GET, the engine-side counterpart of `window.fetch()`.
pub struct Fetch<'a> {
    frame: &'a BrowserFrame,
    window: &'a Window,
    url: &'a str,
    disable_cross_origin_policy: bool,
}

impl<'a> Fetch<'a> {
    pub fn new(options: FetchOptions<'a>) -> Self {
        Self {
            frame: options.frame,
            window: options.window,
            url: options.url,
            disable_cross_origin_policy: options.disable_cross_origin_policy,
        }
    }

    /// Sends the request and waits for the response headers and body.
    ///
    /// Any status is a successful send; check [`Response::ok`]. Errors are reserved for
    /// requests that could not be made at all.
    pub async fn send(self) -> Result<Response, NetError> {
        let location = self.window.location();
        let url = location.join(self.url)?;

        if !self.disable_cross_origin_policy {
            check_origin(&location, &url)?;
        }

        log::debug!("Frame[{}]: fetch GET {}", self.frame.id(), url);

        let request = Request::new(Method::GET, url, self.frame.config(), &location);
        let response = self.frame.transport().send(request).await?;

        log::debug!("Frame[{}]: fetch {} -> {}", self.frame.id(), response.url, response.status);
        Ok(response)
    }
}
