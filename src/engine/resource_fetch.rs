//! Resource loading on behalf of a page.
//!
//! [`ResourceFetch`] is what the DOM side (style sheets, scripts, legacy synchronous
//! APIs) uses to get the text of an external resource. URLs are resolved against the
//! window location and the same-origin check is skipped: these loads are started by
//! the engine, not by page script. Never route script-controlled URLs through here.

use std::sync::Arc;

use crate::engine::frame::BrowserFrame;
use crate::engine::window::Window;
use crate::errors::ResourceFetchError;
use crate::net::{is_success_status, Fetch, FetchOptions, XmlHttpRequest, XmlHttpRequestOptions};

pub struct ResourceFetch {
    frame: Arc<BrowserFrame>,
    window: Arc<Window>,
}

impl ResourceFetch {
    pub fn new(frame: Arc<BrowserFrame>, window: Arc<Window>) -> Self {
        Self { frame, window }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Returns the text of the resource at `url`.
    ///
    /// `url` is resolved against the window location once; the request and any error
    /// report use that same absolute URL, even if the page navigates meanwhile.
    pub async fn fetch(&self, url: &str) -> Result<String, ResourceFetchError> {
        let url = self.window.resolve(url)?;

        let fetch = Fetch::new(FetchOptions {
            frame: &self.frame,
            window: &self.window,
            url: url.as_str(),
            disable_cross_origin_policy: true,
        });
        let response = fetch.send().await?;

        if !response.ok() {
            return Err(ResourceFetchError::Status { url, status: response.status });
        }

        Ok(response.text().await)
    }

    /// Returns the text of the resource at `url`, blocking the current thread.
    ///
    /// Do not call this from an async task.
    pub fn fetch_sync(&self, url: &str) -> Result<String, ResourceFetchError> {
        let url = self.window.resolve(url)?;

        let mut xhr = XmlHttpRequest::new(XmlHttpRequestOptions {
            frame: &self.frame,
            window: &self.window,
            disable_cross_origin_policy: true,
        });

        xhr.open("GET", url.as_str(), false)?;
        xhr.send()?;

        if !is_success_status(xhr.status()) {
            return Err(ResourceFetchError::Status { url, status: xhr.status() });
        }

        Ok(xhr.response_text().to_string())
    }
}
