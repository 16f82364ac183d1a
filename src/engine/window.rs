use std::sync::{PoisonError, RwLock};

use url::{Origin, Url};

/// The document side of a page context: where the page currently is.
///
/// The location may change while resources are loading (navigation, `history.pushState`), so
/// readers always get a snapshot.
#[derive(Debug)]
pub struct Window {
    location: RwLock<Url>,
}

impl Window {
    pub fn new(location: Url) -> Self {
        Self {
            location: RwLock::new(location),
        }
    }

    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(href)?))
    }

    /// Snapshot of the current location
    pub fn location(&self) -> Url {
        self.location.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn location_href(&self) -> String {
        self.location().into()
    }

    pub fn set_location(&self, url: Url) {
        *self.location.write().unwrap_or_else(PoisonError::into_inner) = url;
    }

    pub fn origin(&self) -> Origin {
        self.location().origin()
    }

    /// Resolves `url` against the current location.
    pub fn resolve(&self, url: &str) -> Result<Url, url::ParseError> {
        self.location().join(url)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(Url::parse("about:blank").expect("about:blank is a valid URL"))
    }
}
