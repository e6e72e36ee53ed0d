//! One YAML file per resource.

use super::Discovery;
use crate::error::LoadError;
use crate::fs::{DirEntry, FileSystem};
use crate::resource::Resource;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

/// Extensions recognised as YAML, compared case-insensitively.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Strategy for kinds stored as flat YAML files at the top of a source.
///
/// Directories and files with other extensions are ignored.
pub struct FlatFiles<R> {
    _resource: PhantomData<fn() -> R>,
}

impl<R> Default for FlatFiles<R> {
    fn default() -> Self {
        Self {
            _resource: PhantomData,
        }
    }
}

impl<R> Clone for FlatFiles<R> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<R> fmt::Debug for FlatFiles<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatFiles").finish()
    }
}

pub fn is_yaml(entry: &DirEntry) -> bool {
    !entry.is_dir
        && entry
            .extension()
            .map(|ext| YAML_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
}

impl<R: Resource> Discovery for FlatFiles<R> {
    type Resource = R;

    fn accepts(&self, entry: &DirEntry) -> bool {
        is_yaml(entry)
    }

    fn read(&self, fs: &dyn FileSystem, path: &Path) -> Result<R, LoadError> {
        let raw = fs.read(path).map_err(|source| LoadError::ReadFailed {
            kind: R::KIND,
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_slice(&raw).map_err(|source| LoadError::ParseFailed {
            kind: R::KIND,
            path: path.to_path_buf(),
            source,
        })
    }
}
