/// Browsing context handle shared by everything a page loads.
pub mod frame;
/// Text retrieval of external resources for a page.
pub mod resource_fetch;
/// Document location.
pub mod window;
