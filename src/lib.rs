//! Resource loading for simulated pages.
//!
//! A page is a [`Window`](engine::window::Window) (its current location) living in a
//! [`BrowserFrame`](engine::frame::BrowserFrame) (its browsing context, which owns the
//! transports and fetch configuration). [`ResourceFetch`] ties the two together and gives
//! the rest of the engine one call for asynchronous and one for synchronous retrieval of
//! a resource's text.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gosub_resource_fetch::{BrowserFrame, FetchConfig, ResourceFetch, Window};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = Arc::new(BrowserFrame::new(FetchConfig::default())?);
//! let window = Arc::new(Window::parse("https://example.com/page/")?);
//! let resources = ResourceFetch::new(frame, window);
//!
//! let css = resources.fetch("./style.css").await?;
//! # Ok(()) }
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod net;

pub use config::FetchConfig;
pub use engine::frame::{BrowserFrame, FrameId};
pub use engine::resource_fetch::ResourceFetch;
pub use engine::window::Window;
pub use errors::ResourceFetchError;
