//! Filesystem capability
//!
//! Drivers, loaders and repositories only ever see a `FileSystem` trait object. The concrete
//! backing (local disk, in-memory) is chosen by whoever constructs the driver or repository.
//! `scoped` restricts a capability to a subtree and `read_only` strips write access.

pub mod memory;
pub mod os;
pub mod scoped;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use memory::MemFs;
pub use os::OsFs;
pub use scoped::{ReadOnlyFs, ScopedFs};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Lowercased extension of the entry name, if it has one.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

/// Capability set consumed by the core.
pub trait FileSystem: Send + Sync {
    /// List the immediate entries of a directory, in backing order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// `Ok(false)` when the path is absent or not a directory; `Err` only when the check
    /// itself could not be performed.
    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Combinators available on any shared capability.
pub trait FileSystemExt {
    /// Capability restricted to `root`; paths passed to it are relative to `root`.
    fn scoped(&self, root: impl Into<PathBuf>) -> Arc<dyn FileSystem>;

    /// Capability with `write` and `remove_file` disabled.
    fn read_only(&self) -> Arc<dyn FileSystem>;
}

impl FileSystemExt for Arc<dyn FileSystem> {
    fn scoped(&self, root: impl Into<PathBuf>) -> Arc<dyn FileSystem> {
        Arc::new(ScopedFs::new(Arc::clone(self), root.into()))
    }

    fn read_only(&self) -> Arc<dyn FileSystem> {
        Arc::new(ReadOnlyFs::new(Arc::clone(self)))
    }
}

/// Path of the root directory of a capability.
pub fn root() -> &'static Path {
    Path::new(".")
}
