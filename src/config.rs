//! Fetch configuration.
//!
//! `FetchConfig` controls how a [`BrowserFrame`](crate::engine::frame::BrowserFrame)
//! issues requests: the identity it presents (user agent, languages), whether a
//! `Referer` header is sent, and the timeout handed to the underlying HTTP client.
//!
//! `FetchConfig` provides sensible defaults via [`Default`] and a fluent
//! [`FetchConfig::builder()`] for customization with validation.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use gosub_resource_fetch::config::FetchConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FetchConfig::builder()
//!     .user_agent("Gosub/0.1")
//!     .accept_language("en-US,en;q=0.9,nl;q=0.8")
//!     .timeout(Duration::from_secs(10))
//!     .build()?; // returns Result<FetchConfig, FetchConfigError>
//! assert!(cfg.send_referer);
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `user_agent`: UA string sent with every request (must not be empty).
//! - `accept_language`: Optional `Accept-Language` header value.
//! - `timeout`: Optional total request timeout, enforced by the HTTP client (must not be zero).
//! - `send_referer`: Send the window location as `Referer` if `true`.
//!
//! The config is `serde` (de)serializable. Missing fields take their default value.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) Gosub/0.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub accept_language: Option<String>,
    pub timeout: Option<Duration>,
    pub send_referer: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: None,
            timeout: None,
            send_referer: true,
        }
    }
}

impl FetchConfig {
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Checks a config that did not come through the builder (e.g. deserialized).
    pub fn validate(&self) -> Result<(), FetchConfigError> {
        validate(self)
    }
}

/// Builder for [`FetchConfig`].
#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    inner: FetchConfig,
}

impl FetchConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FetchConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }
    pub fn accept_language<S: Into<String>>(self, langs: S) -> Self { self.map(|c| c.accept_language = Some(langs.into())) }
    pub fn timeout(self, timeout: Duration) -> Self { self.map(|c| c.timeout = Some(timeout)) }
    pub fn send_referer(self, on: bool) -> Self { self.map(|c| c.send_referer = on) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut FetchConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FetchConfig, FetchConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum FetchConfigError {
    EmptyUserAgent,
    ZeroTimeout,
}

impl fmt::Display for FetchConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchConfigError::EmptyUserAgent =>
                write!(f, "user_agent must not be empty"),
            FetchConfigError::ZeroTimeout =>
                write!(f, "timeout must be greater than zero (use None to disable)"),
        }
    }
}
impl std::error::Error for FetchConfigError {}

fn validate(c: &FetchConfig) -> Result<(), FetchConfigError> {
    if c.user_agent.trim().is_empty() {
        return Err(FetchConfigError::EmptyUserAgent);
    }
    if c.timeout == Some(Duration::ZERO) {
        return Err(FetchConfigError::ZeroTimeout);
    }
    Ok(())
}
