//! Subtree and read-only views over another capability.

use super::{DirEntry, FileSystem};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Capability restricted to a subtree of `inner`.
///
/// Paths must be relative and may not climb out of the root with `..`.
pub struct ScopedFs {
    inner: Arc<dyn FileSystem>,
    root: PathBuf,
}

impl ScopedFs {
    pub fn new(inner: Arc<dyn FileSystem>, root: PathBuf) -> Self {
        Self { inner, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        let mut resolved = self.root.clone();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) => resolved.push(name),
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("path outside of scoped root: {}", path.display()),
                    ));
                }
            }
        }
        Ok(resolved)
    }
}

impl FileSystem for ScopedFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.inner.read_dir(&self.resolve(path)?)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.inner.read(&self.resolve(path)?)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.inner.write(&self.resolve(path)?, contents)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.inner.remove_file(&self.resolve(path)?)
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        self.inner.is_dir(&self.resolve(path)?)
    }
}

/// Capability that refuses every mutation.
pub struct ReadOnlyFs {
    inner: Arc<dyn FileSystem>,
}

impl ReadOnlyFs {
    pub fn new(inner: Arc<dyn FileSystem>) -> Self {
        Self { inner }
    }
}

fn read_only_error(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("read-only filesystem: {}", path.display()),
    )
}

impl FileSystem for ReadOnlyFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.inner.read_dir(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.inner.read(path)
    }

    fn write(&self, path: &Path, _contents: &[u8]) -> io::Result<()> {
        Err(read_only_error(path))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        Err(read_only_error(path))
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        self.inner.is_dir(path)
    }
}
