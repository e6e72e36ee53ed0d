//! URI resolver.

use super::driver::split_scheme;
use super::registry::DriverRegistry;
use crate::error::SourceError;
use crate::fs::FileSystem;
use std::sync::Arc;

/// Dispatches URIs to the driver registered for their scheme.
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<DriverRegistry>,
}

impl Resolver {
    pub fn new(registry: Arc<DriverRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<DriverRegistry> {
        &self.registry
    }

    /// Resolve `uri` to a filesystem.
    ///
    /// The scheme is everything before the first `://`. The driver receives the original URI
    /// untouched, including any further `://` in the opaque part.
    pub fn resolve(&self, uri: &str) -> Result<Arc<dyn FileSystem>, SourceError> {
        let (scheme, _) =
            split_scheme(uri).ok_or_else(|| SourceError::UriSchemeNotFound(uri.to_string()))?;

        let wrap = |source: SourceError| SourceError::Resolve {
            uri: uri.to_string(),
            source: Box::new(source),
        };

        let driver = self.registry.get_driver_by_scheme(scheme).map_err(wrap)?;
        tracing::debug!(uri, scheme, "Resolving source");
        driver.resolve(uri).map_err(wrap)
    }
}
