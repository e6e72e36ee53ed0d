//! In-memory backing.

use super::{DirEntry, FileSystem};
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};

/// `FileSystem` held entirely in memory.
///
/// Directories exist implicitly as parents of files, or explicitly via `add_dir`. Listings are
/// ordered by name. Absolute and relative paths address the same tree.
#[derive(Debug, Default)]
pub struct MemFs {
    state: RwLock<MemState>,
}

#[derive(Debug, Default)]
struct MemState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl MemState {
    fn is_dir(&self, path: &Path) -> bool {
        path.as_os_str().is_empty()
            || self.dirs.contains(path)
            || self
                .files
                .keys()
                .chain(self.dirs.iter())
                .any(|p| p != path && p.starts_with(path))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(name) => normalized.push(name),
            Component::ParentDir => {
                normalized.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    normalized
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a file.
    pub fn add_file(&self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        let path = normalize(path.as_ref());
        self.state.write().files.insert(path, contents.into());
    }

    /// Create an (empty) directory.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        self.state.write().dirs.insert(path);
    }
}

impl FileSystem for MemFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let dir = normalize(path);
        let state = self.state.read();
        if !state.is_dir(&dir) {
            return Err(not_found(path));
        }

        let mut children: BTreeMap<String, bool> = BTreeMap::new();
        let file_paths = state.files.keys().map(|p| (p, false));
        let dir_paths = state.dirs.iter().map(|p| (p, true));
        for (candidate, explicit_dir) in file_paths.chain(dir_paths) {
            let Ok(rest) = candidate.strip_prefix(&dir) else {
                continue;
            };
            let mut components = rest.components();
            let Some(first) = components.next() else {
                continue;
            };
            let nested = components.next().is_some();
            let name = first.as_os_str().to_string_lossy().into_owned();
            let is_dir = children.entry(name).or_insert(false);
            *is_dir |= nested || explicit_dir;
        }

        Ok(children
            .into_iter()
            .map(|(name, is_dir)| DirEntry { name, is_dir })
            .collect())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let file = normalize(path);
        let state = self.state.read();
        match state.files.get(&file) {
            Some(contents) => Ok(contents.clone()),
            None if state.is_dir(&file) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let file = normalize(path);
        let mut state = self.state.write();
        if state.is_dir(&file) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {}", path.display()),
            ));
        }
        state.files.insert(file, contents.to_vec());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let file = normalize(path);
        match self.state.write().files.remove(&file) {
            Some(_) => Ok(()),
            None => Err(not_found(path)),
        }
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        let dir = normalize(path);
        let state = self.state.read();
        Ok(!state.files.contains_key(&dir) && state.is_dir(&dir))
    }
}
