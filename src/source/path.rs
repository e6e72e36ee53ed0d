//! Lexical path normalization for source paths.

use std::path::{Component, Path, PathBuf};

/// Lexically clean a path: drop `.` segments and repeated separators, fold `name/..` pairs.
///
/// `..` directly under the root is dropped; leading `..` of a relative path are kept. An
/// empty result becomes `.`. No filesystem access is performed.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(path: &str) -> String {
        clean_path(Path::new(path)).to_string_lossy().into_owned()
    }

    #[test]
    fn removes_dot_segments() {
        assert_eq!(clean("./a/./b"), "a/b");
        assert_eq!(clean("a//b///c"), "a/b/c");
        assert_eq!(clean("a/b/../c"), "a/c");
        assert_eq!(clean("/a/b/../../c"), "/c");
    }

    #[test]
    fn keeps_leading_parent_segments_of_relative_paths() {
        assert_eq!(clean("../a"), "../a");
        assert_eq!(clean("a/../../b"), "../b");
    }

    #[test]
    fn parent_of_root_is_root() {
        assert_eq!(clean("/.."), "/");
        assert_eq!(clean("/../a"), "/a");
    }

    #[test]
    fn empty_results_become_dot() {
        assert_eq!(clean("."), ".");
        assert_eq!(clean("a/.."), ".");
    }
}
