//! Transports carry a [`Request`] over the wire and return a buffered [`Response`].
//!
//! A [`BrowserFrame`](crate::engine::frame::BrowserFrame) owns one transport of each
//! kind: an async [`HttpTransport`] used by [`Fetch`](crate::net::fetch::Fetch) and a
//! [`BlockingHttpTransport`] used by [`XmlHttpRequest`](crate::net::xhr::XmlHttpRequest).
//! The reqwest-backed implementations are the defaults; embedders and tests can
//! provide their own.
//!
//! Redirects, timeouts and connection reuse are the transport's business.

use std::sync::OnceLock;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::config::FetchConfig;
use crate::net::{NetError, Request, Response};

/// Asynchronous transport.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: Request) -> BoxFuture<'static, Result<Response, NetError>>;
}

/// Blocking transport. `send` does not return until the request has completed or failed.
pub trait BlockingHttpTransport: Send + Sync {
    fn send(&self, request: Request) -> Result<Response, NetError>;
}

/// Async transport backed by a shared `reqwest::Client`. Must be polled on a tokio runtime.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &FetchConfig) -> Result<Self, NetError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { client: builder.build()? })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: Request) -> BoxFuture<'static, Result<Response, NetError>> {
        let client = self.client.clone();

        async move {
            let res = client
                .request(request.method, request.url)
                .headers(request.headers)
                .send()
                .await?;

            // Fetch results
            let final_url = res.url().clone();
            let status = res.status().as_u16();
            let headers = res.headers().clone();

            // Fetch body. We don't do streaming
            let body = res.bytes().await?.to_vec();

            Ok(Response::new(final_url, status, headers, body))
        }
        .boxed()
    }
}

/// Blocking transport backed by `reqwest::blocking::Client`.
///
/// The client is built on first use, so the transport can be created from within an async
/// runtime. `send` itself must not be called from an async task; use a plain thread or
/// `spawn_blocking`.
pub struct BlockingReqwestTransport {
    config: FetchConfig,
    client: OnceLock<reqwest::blocking::Client>,
}

impl BlockingReqwestTransport {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            config: config.clone(),
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> Result<&reqwest::blocking::Client, NetError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        // Another thread may have won the race; either client is fine.
        Ok(self.client.get_or_init(|| client))
    }
}

impl BlockingHttpTransport for BlockingReqwestTransport {
    fn send(&self, request: Request) -> Result<Response, NetError> {
        let res = self
            .client()?
            .request(request.method, request.url)
            .headers(request.headers)
            .send()?;

        let final_url = res.url().clone();
        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = res.bytes()?.to_vec();

        Ok(Response::new(final_url, status, headers, body))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use std::sync::Arc;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn get(server: &MockServer, p: &str) -> Request {
        let url = Url::parse(&format!("{}{}", server.uri(), p)).unwrap();
        let referrer = Url::parse(&server.uri()).unwrap();
        Request::new(Method::GET, url, &FetchConfig::default(), &referrer)
    }

    #[test]
    fn blocking_client_is_built_lazily() {
        let cfg = FetchConfig::builder().timeout(Duration::from_secs(5)).build().unwrap();
        let blocking = BlockingReqwestTransport::new(&cfg);
        assert!(blocking.client.get().is_none());
    }

    #[tokio::test]
    async fn async_transport_buffers_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.css"))
            .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/css")
                    .set_body_string("a{}"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(&FetchConfig::default()).unwrap();
        let response = transport.send(get(&server, "/a.css")).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.status_text, "OK");
        assert_eq!(response.headers["content-type"], "text/css");
        assert_eq!(response.body, b"a{}");
    }

    #[tokio::test]
    async fn transports_report_final_url_after_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old.js"))
            .respond_with(ResponseTemplate::new(301).insert_header("location", "/new.js"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(&FetchConfig::default()).unwrap();
        let response = transport.send(get(&server, "/old.js")).await.unwrap();
        assert_eq!(response.url.path(), "/new.js");
        assert_eq!(response.body, b"moved");

        let blocking = Arc::new(BlockingReqwestTransport::new(&FetchConfig::default()));
        let request = get(&server, "/old.js");
        let response = tokio::task::spawn_blocking(move || blocking.send(request))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.url.path(), "/new.js");
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn timeout_from_config_is_applied() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let cfg = FetchConfig::builder().timeout(Duration::from_millis(100)).build().unwrap();

        let transport = ReqwestTransport::new(&cfg).unwrap();
        let err = transport.send(get(&server, "/slow")).await.unwrap_err();
        assert!(matches!(&err, NetError::Transport(e) if e.is_timeout()));

        let blocking = Arc::new(BlockingReqwestTransport::new(&cfg));
        let request = get(&server, "/slow");
        let err = tokio::task::spawn_blocking(move || blocking.send(request))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(&err, NetError::Transport(e) if e.is_timeout()));
    }
}
