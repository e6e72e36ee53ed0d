//! Driver port.

use crate::error::SourceError;
use crate::fs::FileSystem;
use std::sync::Arc;

pub const SCHEME_SEPARATOR: &str = "://";

/// Resolves URIs of one or more schemes to a read-only filesystem scoped to a subtree.
pub trait Driver: Send + Sync {
    /// Fixed set of schemes owned by this driver.
    fn supported_schemes(&self) -> &[String];

    /// Resolve the full URI, scheme included.
    fn resolve(&self, uri: &str) -> Result<Arc<dyn FileSystem>, SourceError>;
}

/// Split a URI on the first `://` into `(scheme, rest)`.
pub fn split_scheme(uri: &str) -> Option<(&str, &str)> {
    uri.split_once(SCHEME_SEPARATOR)
}
