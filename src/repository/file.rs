//! Generic one-file-per-resource store.

use crate::error::RepositoryError;
use crate::fs::{self, FileSystem, FileSystemExt, OsFs};
use crate::resource::Resource;
use parking_lot::RwLock;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Extension of persisted resource files.
pub const RECORD_EXTENSION: &str = "json";

/// Stores resources of one kind as `<uuid>.json` files at the root of a writable capability.
///
/// All operations take the same lock: `add` and `remove_all` exclusively, reads shared.
pub struct FileRepository<R> {
    fs: Arc<dyn FileSystem>,
    lock: RwLock<()>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> FileRepository<R> {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            lock: RwLock::new(()),
            _resource: PhantomData,
        }
    }

    /// Repository over a local directory, created if missing.
    pub fn open(dir: &Path) -> Result<Self, RepositoryError> {
        std::fs::create_dir_all(dir).map_err(|source| RepositoryError::CreateDirFailed {
            path: dir.to_path_buf(),
            source,
        })?;
        let os: Arc<dyn FileSystem> = Arc::new(OsFs::new());
        Ok(Self::new(os.scoped(dir)))
    }

    pub fn get_all(&self) -> Result<Vec<R>, RepositoryError> {
        let _guard = self.lock.read();
        let mut resources = self
            .record_paths()?
            .iter()
            .map(|path| self.decode(path))
            .collect::<Result<Vec<_>, _>>()?;
        resources.sort_by(|a, b| a.identity().cmp(b.identity()));
        Ok(resources)
    }

    /// First stored resource with the given identity, in listing order.
    pub fn find(&self, name: &str) -> Result<Option<R>, RepositoryError> {
        let _guard = self.lock.read();
        self.find_unlocked(name)
    }

    pub fn get_by_identity(&self, name: &str) -> Result<R, RepositoryError> {
        self.find(name)?
            .ok_or_else(|| RepositoryError::ResourceNotFound {
                kind: R::KIND,
                name: name.to_string(),
            })
    }

    pub fn add(&self, resource: &R) -> Result<(), RepositoryError> {
        let _guard = self.lock.write();
        self.write_record(resource)
    }

    /// Add unless a resource with the same identity exists; the check and the write happen
    /// under one exclusive lock.
    pub fn add_unique<F>(&self, resource: &R, on_duplicate: F) -> Result<(), RepositoryError>
    where
        F: FnOnce(&str) -> RepositoryError,
    {
        let _guard = self.lock.write();
        if self.find_unlocked(resource.identity())?.is_some() {
            return Err(on_duplicate(resource.identity()));
        }
        self.write_record(resource)
    }

    /// Remove every file in the repository directory. Idempotent.
    pub fn remove_all(&self) -> Result<(), RepositoryError> {
        let _guard = self.lock.write();
        let entries = match self.fs.read_dir(fs::root()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(source) => return Err(RepositoryError::ListFailed { source }),
        };

        let mut removed = 0usize;
        for entry in entries.into_iter().filter(|entry| !entry.is_dir) {
            let path = PathBuf::from(entry.name);
            self.fs
                .remove_file(&path)
                .map_err(|source| RepositoryError::RemoveFailed { path, source })?;
            removed += 1;
        }
        tracing::debug!(kind = %R::KIND, removed, "Cleared repository");
        Ok(())
    }

    // Callers hold the lock.
    fn record_paths(&self) -> Result<Vec<PathBuf>, RepositoryError> {
        let entries = match self.fs.read_dir(fs::root()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(RepositoryError::ListFailed { source }),
        };
        Ok(entries
            .into_iter()
            .filter(|entry| {
                !entry.is_dir && entry.extension().as_deref() == Some(RECORD_EXTENSION)
            })
            .map(|entry| PathBuf::from(entry.name))
            .collect())
    }

    fn find_unlocked(&self, name: &str) -> Result<Option<R>, RepositoryError> {
        for path in self.record_paths()? {
            let resource = self.decode(&path)?;
            if resource.identity() == name {
                return Ok(Some(resource));
            }
        }
        Ok(None)
    }

    fn decode(&self, path: &Path) -> Result<R, RepositoryError> {
        let raw = self
            .fs
            .read(path)
            .map_err(|source| RepositoryError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_slice(&raw).map_err(|source| RepositoryError::DecodeFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_record(&self, resource: &R) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(resource).map_err(|source| {
            RepositoryError::EncodeFailed {
                kind: R::KIND,
                source,
            }
        })?;
        let path = PathBuf::from(format!("{}.{}", Uuid::new_v4(), RECORD_EXTENSION));
        self.fs
            .write(&path, &bytes)
            .map_err(|source| RepositoryError::WriteFailed {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            kind = %R::KIND,
            name = resource.identity(),
            file = %path.display(),
            "Stored resource"
        );
        Ok(())
    }
}
