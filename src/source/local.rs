//! `local://` driver for directories on the backing filesystem.

use super::driver::{split_scheme, Driver};
use super::path::clean_path;
use crate::error::SourceError;
use crate::fs::{FileSystem, FileSystemExt, OsFs};
use std::path::Path;
use std::sync::Arc;

pub const LOCAL_SCHEME: &str = "local";

/// Resolves `local://<path>` to a read-only view of that directory.
///
/// Paths may be absolute or relative; relative paths are interpreted by the root capability
/// (the process working directory for `OsFs`).
pub struct LocalDriver {
    root: Arc<dyn FileSystem>,
    schemes: Vec<String>,
}

impl LocalDriver {
    /// Driver over the local disk.
    pub fn new() -> Self {
        Self::with_root(Arc::new(OsFs::new()))
    }

    /// Driver over an arbitrary root capability.
    pub fn with_root(root: Arc<dyn FileSystem>) -> Self {
        Self {
            root,
            schemes: vec![LOCAL_SCHEME.to_string()],
        }
    }
}

impl Default for LocalDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for LocalDriver {
    fn supported_schemes(&self) -> &[String] {
        &self.schemes
    }

    fn resolve(&self, uri: &str) -> Result<Arc<dyn FileSystem>, SourceError> {
        let path = match split_scheme(uri) {
            Some((LOCAL_SCHEME, path)) => path,
            Some((scheme, _)) => {
                return Err(SourceError::UnsupportedScheme {
                    scheme: scheme.to_string(),
                    uri: uri.to_string(),
                })
            }
            None => return Err(SourceError::UriSchemeNotFound(uri.to_string())),
        };

        if path.is_empty() {
            return Err(SourceError::EmptyPath(uri.to_string()));
        }

        let path = clean_path(Path::new(path));
        match self.root.is_dir(&path) {
            Ok(true) => {}
            Ok(false) => return Err(SourceError::DirectoryNotFound(path)),
            Err(source) => return Err(SourceError::DirectoryCheckFailed { path, source }),
        }

        Ok(self.root.scoped(path).read_only())
    }
}
