// crates/chickenhead-core/src/store.rs - File operations on resolved snippets
//
// This is the data access layer: it knows HOW to put snippets on disk but not
// WHEN. Existence checks before add/edit/view/delete are the command layer's
// job, so e.g. delete() on a missing file is an error here rather than a no-op.
//
// LAYOUT:
// ```
// <root>/
// ├── hello.txt          (identifier "hello.txt")
// └── go/
//     └── http/
//         └── server     (identifier "go/http/server")
// ```
// No metadata files live next to the snippets.

use regex::Regex;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ChickenheadError, Result};
use crate::snippet::{self, Snippet};

/// Handles all file system access below the snippet root
pub struct SnippetStore {
    root: PathBuf,
}

impl SnippetStore {
    /// Create a store for the given root
    ///
    /// Doesn't touch the disk; call [`SnippetStore::ensure_root`] before use.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an identifier against this store's root
    pub fn resolve(&self, identifier: &str) -> Snippet {
        snippet::resolve(&self.root, identifier)
    }

    /// Create the root directory if it is missing
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| ChickenheadError::io(&self.root, e))
    }

    /// True only for a regular file at the snippet's path
    ///
    /// A directory with the same name counts as "no snippet".
    pub fn exists(&self, snippet: &Snippet) -> bool {
        fs::metadata(snippet.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// Open the snippet for writing, creating group directories first
    ///
    /// Truncates an existing file. The handle is closed when dropped.
    pub fn create(&self, snippet: &Snippet) -> Result<File> {
        // create_dir_all is already a no-op for directories that exist
        fs::create_dir_all(snippet.group_dir())
            .map_err(|e| ChickenheadError::io(snippet.group_dir(), e))?;

        File::create(snippet.path()).map_err(|e| ChickenheadError::io(snippet.path(), e))
    }

    /// Create the snippet and fill it with `contents`
    pub fn write(&self, snippet: &Snippet, contents: &[u8]) -> Result<()> {
        let mut file = self.create(snippet)?;
        file.write_all(contents)
            .and_then(|()| file.flush())
            .map_err(|e| ChickenheadError::io(snippet.path(), e))
    }

    /// Read the whole snippet as UTF-8 text
    pub fn read_contents(&self, snippet: &Snippet) -> Result<String> {
        let mut file = File::open(snippet.path()).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ChickenheadError::NotFound(snippet.path().to_path_buf()),
            _ => ChickenheadError::io(snippet.path(), e),
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ChickenheadError::io(snippet.path(), e))?;
        Ok(contents)
    }

    /// Remove the snippet file
    pub fn delete(&self, snippet: &Snippet) -> Result<()> {
        fs::remove_file(snippet.path()).map_err(|e| ChickenheadError::io(snippet.path(), e))
    }

    /// Every snippet under the root as a root-relative, `/`-separated path
    ///
    /// Directories are walked recursively in file-name order and never
    /// reported themselves. With a filter, only matching paths are kept.
    pub fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<String>> {
        let mut snippets = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                ChickenheadError::io(path, io::Error::other(e))
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path());
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if filter.is_none_or(|f| f.matches(&relative)) {
                snippets.push(relative);
            }
        }

        Ok(snippets)
    }
}

/// Pattern used by `list` to narrow down snippet paths
///
/// The pattern is a case-sensitive regular expression that may match anywhere
/// in the relative path, so a plain word behaves as a substring search.
#[derive(Debug, Clone)]
pub struct ListFilter {
    pattern: Regex,
}

impl ListFilter {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            ChickenheadError::Validation(format!("invalid list filter '{pattern}': {e}"))
        })?;
        Ok(Self { pattern })
    }

    pub fn matches(&self, relative_path: &str) -> bool {
        self.pattern.is_match(relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, SnippetStore) {
        let temp = TempDir::new().unwrap();
        let store = SnippetStore::new(temp.path().join("snippets"));
        store.ensure_root().unwrap();
        (temp, store)
    }

    #[test]
    fn test_exists_lifecycle() {
        let (_temp, store) = store();
        let snippet = store.resolve("go/http/server");

        assert!(!store.exists(&snippet));

        drop(store.create(&snippet).unwrap());
        assert!(store.exists(&snippet));
        assert!(snippet.group_dir().is_dir());

        store.delete(&snippet).unwrap();
        assert!(!store.exists(&snippet));
    }

    #[test]
    fn test_exists_after_write() {
        let (_temp, store) = store();
        let snippet = store.resolve("notes");
        store.write(&snippet, b"x").unwrap();
        assert!(store.exists(&snippet));
    }

    #[test]
    fn test_directory_is_not_a_snippet() {
        let (_temp, store) = store();
        fs::create_dir_all(store.root().join("go")).unwrap();
        assert!(!store.exists(&store.resolve("go")));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_temp, store) = store();
        let snippet = store.resolve("shell/loop.sh");
        let contents = "for f in *; do\n  echo \"$f\"\ndone\n";

        store.write(&snippet, contents.as_bytes()).unwrap();
        assert_eq!(store.read_contents(&snippet).unwrap(), contents);
    }

    #[test]
    fn test_create_reuses_existing_group_dirs() {
        let (_temp, store) = store();
        store.write(&store.resolve("rust/one"), b"1").unwrap();
        store.write(&store.resolve("rust/two"), b"2").unwrap();

        let one = store.read_contents(&store.resolve("rust/one")).unwrap();
        let two = store.read_contents(&store.resolve("rust/two")).unwrap();
        assert_eq!(one, "1");
        assert_eq!(two, "2");
    }

    #[test]
    fn test_create_fails_when_group_is_a_file() {
        let (_temp, store) = store();
        store.write(&store.resolve("rust"), b"a file").unwrap();

        let err = store.create(&store.resolve("rust/inner")).unwrap_err();
        assert!(matches!(err, ChickenheadError::Io { .. }));
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let (_temp, store) = store();
        let err = store.read_contents(&store.resolve("nope")).unwrap_err();
        assert!(matches!(err, ChickenheadError::NotFound(_)));
    }

    #[test]
    fn test_delete_missing_is_io_error() {
        let (_temp, store) = store();
        let err = store.delete(&store.resolve("nope")).unwrap_err();
        assert!(matches!(err, ChickenheadError::Io { .. }));
    }

    #[test]
    fn test_list_walks_recursively_in_name_order() {
        let (_temp, store) = store();
        for id in ["zsh", "go/http/server", "go/fmt", "awk/sum"] {
            store.write(&store.resolve(id), b"").unwrap();
        }
        fs::create_dir_all(store.root().join("empty/group")).unwrap();

        let listed = store.list(None).unwrap();
        assert_eq!(listed, ["awk/sum", "go/fmt", "go/http/server", "zsh"]);
    }

    #[test]
    fn test_list_with_filter() {
        let (_temp, store) = store();
        for id in ["foo", "bar/foo.sh", "bar/baz", "Foo/x", "food/y"] {
            store.write(&store.resolve(id), b"").unwrap();
        }

        let filter = ListFilter::new("foo").unwrap();
        let listed = store.list(Some(&filter)).unwrap();
        assert_eq!(listed, ["bar/foo.sh", "foo", "food/y"]);
    }

    #[test]
    fn test_list_empty_root() {
        let (_temp, store) = store();
        assert!(store.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_filter_is_validation_error() {
        let err = ListFilter::new("(unclosed").unwrap_err();
        assert!(matches!(err, ChickenheadError::Validation(_)));
    }
}
