use http::header::{HeaderValue, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use http::{HeaderMap, Method};
use url::Url;

use crate::config::FetchConfig;

/// A request as handed to a transport.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl Request {
    /// Builds a request carrying the frame's identity headers. `referrer` is the document
    /// location the request originates from.
    pub fn new(method: Method, url: Url, config: &FetchConfig, referrer: &Url) -> Self {
        let mut headers = HeaderMap::new();

        if let Ok(v) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, v);
        }
        if let Some(langs) = &config.accept_language {
            if let Ok(v) = HeaderValue::from_str(langs) {
                headers.insert(ACCEPT_LANGUAGE, v);
            }
        }
        if config.send_referer {
            if let Some(v) = referrer_header(referrer) {
                headers.insert(REFERER, v);
            }
        }

        Self { method, url, headers }
    }
}

// Only http(s) documents leak a referrer, never with credentials or fragment.
fn referrer_header(location: &Url) -> Option<HeaderValue> {
    if !matches!(location.scheme(), "http" | "https") {
        return None;
    }

    let mut referrer = location.clone();
    referrer.set_fragment(None);
    let _ = referrer.set_username("");
    let _ = referrer.set_password(None);

    HeaderValue::from_str(referrer.as_str()).ok()
}
