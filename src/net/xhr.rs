//! Synchronous `XMLHttpRequest`.
//!
//! Only the blocking mode is modelled: `open(.., false)` followed by a `send()` that
//! occupies the calling thread until the transport returns. Network-level failures do
//! not surface as errors from `send()`; like a browser, the request completes with
//! status `0` and an empty body.

use http::Method;
use url::Url;

use crate::engine::frame::BrowserFrame;
use crate::engine::window::Window;
use crate::net::decode::decode_response_body;
use crate::net::{check_origin, NetError, Request};

pub struct XmlHttpRequestOptions<'a> {
    pub frame: &'a BrowserFrame,
    pub window: &'a Window,
    /// Skip the same-origin check. Only for engine-initiated loads.
    pub disable_cross_origin_policy: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadyState {
    Unsent,
    Opened,
    Done,
}

pub struct XmlHttpRequest<'a> {
    frame: &'a BrowserFrame,
    window: &'a Window,
    disable_cross_origin_policy: bool,

    ready_state: ReadyState,
    /// Method and absolute URL given to `open()`
    opened: Option<(Method, Url)>,
    /// Location the request was opened from, used for the origin check and referrer
    opened_from: Option<Url>,

    status: u16,
    status_text: String,
    response_url: Option<Url>,
    response_text: String,
}

impl<'a> XmlHttpRequest<'a> {
    pub fn new(options: XmlHttpRequestOptions<'a>) -> Self {
        Self {
            frame: options.frame,
            window: options.window,
            disable_cross_origin_policy: options.disable_cross_origin_policy,
            ready_state: ReadyState::Unsent,
            opened: None,
            opened_from: None,
            status: 0,
            status_text: String::new(),
            response_url: None,
            response_text: String::new(),
        }
    }

    /// Prepares a request. `url` is resolved against the window location at this point.
    pub fn open(&mut self, method: &str, url: &str, asynchronous: bool) -> Result<(), NetError> {
        if asynchronous {
            return Err(NetError::NotSupported("asynchronous XMLHttpRequest; use Fetch instead"));
        }

        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| NetError::InvalidMethod(method.to_string()))?;

        let location = self.window.location();
        let url = location.join(url)?;

        self.reset_response();
        self.opened = Some((method, url));
        self.opened_from = Some(location);
        self.ready_state = ReadyState::Opened;
        Ok(())
    }

    /// Performs the request, blocking until it has completed.
    pub fn send(&mut self) -> Result<(), NetError> {
        let (Some((method, url)), Some(location)) = (self.opened.take(), self.opened_from.take()) else {
            return Err(NetError::InvalidState("send() called before open()"));
        };

        if !self.disable_cross_origin_policy {
            if let Err(e) = check_origin(&location, &url) {
                self.ready_state = ReadyState::Done;
                return Err(e);
            }
        }

        log::debug!("Frame[{}]: sync {} {}", self.frame.id(), method, url);

        let request = Request::new(method, url, self.frame.config(), &location);
        match self.frame.blocking_transport().send(request) {
            Ok(response) => {
                log::debug!("Frame[{}]: sync {} -> {}", self.frame.id(), response.url, response.status);

                self.status = response.status;
                self.status_text = response.status_text;
                self.response_text = decode_response_body(&response.headers, &response.body);
                self.response_url = Some(response.url);
            }
            Err(e) => {
                log::warn!("Frame[{}]: sync request failed: {}", self.frame.id(), e);
                self.reset_response();
            }
        }

        self.ready_state = ReadyState::Done;
        Ok(())
    }

    fn reset_response(&mut self) {
        self.status = 0;
        self.status_text.clear();
        self.response_url = None;
        self.response_text.clear();
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Status of the finished request, `0` before completion or after a network failure
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn response_url(&self) -> Option<&Url> {
        self.response_url.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use crate::net::transport::mock::StaticTransport;
    use http::header::USER_AGENT;
    use std::sync::Arc;

    fn frame(transport: Arc<StaticTransport>) -> BrowserFrame {
        let cfg = FetchConfig::builder().user_agent("Xhr/1.0").build().unwrap();
        BrowserFrame::with_transports(cfg, transport.clone(), transport)
    }

    fn xhr<'a>(frame: &'a BrowserFrame, window: &'a Window, bypass: bool) -> XmlHttpRequest<'a> {
        XmlHttpRequest::new(XmlHttpRequestOptions {
            frame,
            window,
            disable_cross_origin_policy: bypass,
        })
    }

    #[test]
    fn open_send_reads_status_and_text() {
        let transport = Arc::new(StaticTransport::new().route("https://site.test/a/b.css", 200, "b{}"));
        let frame = frame(transport.clone());
        let window = Window::parse("https://site.test/a/").unwrap();

        let mut req = xhr(&frame, &window, false);
        assert_eq!(req.ready_state(), ReadyState::Unsent);

        req.open("get", "b.css", false).unwrap();
        assert_eq!(req.ready_state(), ReadyState::Opened);

        req.send().unwrap();
        assert_eq!(req.ready_state(), ReadyState::Done);
        assert_eq!(req.status(), 200);
        assert_eq!(req.status_text(), "OK");
        assert_eq!(req.response_text(), "b{}");
        assert_eq!(req.response_url().unwrap().as_str(), "https://site.test/a/b.css");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.headers[USER_AGENT], "Xhr/1.0");
    }

    #[test]
    fn send_before_open_is_invalid() {
        let frame = frame(Arc::new(StaticTransport::new()));
        let window = Window::parse("https://site.test/").unwrap();

        let mut req = xhr(&frame, &window, true);
        assert_eq!(req.status(), 0);
        assert_eq!(req.status_text(), "");
        assert!(matches!(req.send(), Err(NetError::InvalidState(_))));
    }

    #[test]
    fn async_mode_and_bad_method_are_rejected() {
        let frame = frame(Arc::new(StaticTransport::new()));
        let window = Window::parse("https://site.test/").unwrap();

        let mut req = xhr(&frame, &window, true);
        assert!(matches!(req.open("GET", "/x", true), Err(NetError::NotSupported(_))));
        assert!(matches!(req.open("GE T", "/x", false), Err(NetError::InvalidMethod(_))));
        assert_eq!(req.ready_state(), ReadyState::Unsent);
    }

    #[test]
    fn relative_url_without_base_fails_on_open() {
        let frame = frame(Arc::new(StaticTransport::new()));
        let window = Window::default();

        let mut req = xhr(&frame, &window, true);
        assert!(matches!(req.open("GET", "style.css", false), Err(NetError::InvalidUrl(_))));
    }

    #[test]
    fn network_failure_completes_with_status_zero() {
        let transport = Arc::new(StaticTransport::new().fail("https://site.test/down", "reset"));
        let frame = frame(transport);
        let window = Window::parse("https://site.test/").unwrap();

        let mut req = xhr(&frame, &window, true);
        req.open("GET", "/down", false).unwrap();
        req.send().unwrap();

        assert_eq!(req.ready_state(), ReadyState::Done);
        assert_eq!(req.status(), 0);
        assert_eq!(req.status_text(), "");
        assert_eq!(req.response_text(), "");
        assert!(req.response_url().is_none());
    }

    #[test]
    fn cross_origin_is_blocked_unless_disabled() {
        let transport = Arc::new(StaticTransport::new().route("https://cdn.test/app.js", 200, "x"));
        let frame = frame(transport.clone());
        let window = Window::parse("https://site.test/").unwrap();

        let mut req = xhr(&frame, &window, false);
        req.open("GET", "https://cdn.test/app.js", false).unwrap();
        assert!(matches!(req.send(), Err(NetError::CrossOriginBlocked { .. })));
        assert_eq!(transport.calls(), 0);

        let mut req = xhr(&frame, &window, true);
        req.open("GET", "https://cdn.test/app.js", false).unwrap();
        req.send().unwrap();
        assert_eq!(req.status(), 200);
        assert_eq!(transport.calls(), 1);
    }
}
