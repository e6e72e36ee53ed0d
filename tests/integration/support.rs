//! On-disk fixtures shared by the integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn local_uri(path: &Path) -> String {
    format!("local://{}", path.display())
}

/// A temporary directory laid out like a project with resource sources.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn uri(&self, relative: &str) -> String {
        local_uri(&self.path(relative))
    }

    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// `<source>/<name>/{metadata.yaml,instructions.md}`
    pub fn skill(&self, source: &str, name: &str, instructions: &str) {
        self.write(
            &format!("{}/{}/metadata.yaml", source, name),
            format!("name: {}\ndescription: The {} skill\n", name, name),
        );
        self.write(&format!("{}/{}/instructions.md", source, name), instructions);
    }

    pub fn workflow(&self, source: &str, file: &str, name: &str) {
        self.write(
            &format!("{}/{}", source, file),
            format!(
                "name: {}\nsteps:\n  - name: first\n    prompt: Start {}.\n",
                name, name
            ),
        );
    }
}
