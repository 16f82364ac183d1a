use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::config::FetchConfig;
use crate::net::{BlockingHttpTransport, BlockingReqwestTransport, HttpTransport, NetError, ReqwestTransport};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct FrameId(Uuid);

impl FrameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FrameId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FrameId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Browsing context a page lives in.
///
/// Every request issued on behalf of a page goes through its frame, so the frame owns the
/// transports and the fetch configuration. A frame is immutable once built and is shared
/// with `Arc`.
pub struct BrowserFrame {
    id: FrameId,
    config: FetchConfig,
    transport: Arc<dyn HttpTransport>,
    blocking_transport: Arc<dyn BlockingHttpTransport>,
}

impl BrowserFrame {
    /// Creates a frame backed by the reqwest transports.
    pub fn new(config: FetchConfig) -> Result<Self, NetError> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        let blocking_transport = Arc::new(BlockingReqwestTransport::new(&config));

        Ok(Self::with_transports(config, transport, blocking_transport))
    }

    pub fn with_transports(
        config: FetchConfig,
        transport: Arc<dyn HttpTransport>,
        blocking_transport: Arc<dyn BlockingHttpTransport>,
    ) -> Self {
        Self {
            id: FrameId::new(),
            config,
            transport,
            blocking_transport,
        }
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    pub(crate) fn blocking_transport(&self) -> &dyn BlockingHttpTransport {
        self.blocking_transport.as_ref()
    }
}

impl fmt::Debug for BrowserFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserFrame")
            .field("id", &self.id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
