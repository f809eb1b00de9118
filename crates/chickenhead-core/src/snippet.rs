// crates/chickenhead-core/src/snippet.rs - Snippet identifiers and path resolution
//
// A snippet identifier is a slash-separated string. The last segment is the
// snippet's file name; every segment before it is a group, and each group is a
// directory nested under the snippet root:
//
//   identifier "go/http/server"  with root "/home/me/.chickenhead"
//   ┌──────────────┬───────────────────────────────────────┐
//   │ name         │ server                                │
//   │ group        │ go/http                               │
//   │ group dir    │ /home/me/.chickenhead/go/http         │
//   │ path         │ /home/me/.chickenhead/go/http/server  │
//   └──────────────┴───────────────────────────────────────┘
//
// Everything in this module is pure string and path arithmetic. Nothing here
// touches the filesystem; see store.rs for that.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ChickenheadError, Result};

/// Separator between groups and the snippet name in an identifier
pub const SEPARATOR: char = '/';

/// A snippet identifier resolved against a root directory
///
/// Built fresh for every command and thrown away afterwards. The file it
/// points at may or may not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    identifier: String,
    name: String,
    group: Vec<String>,
    group_dir: PathBuf,
    path: PathBuf,
}

impl Snippet {
    /// The identifier exactly as the user typed it
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Bare name, i.e. the final segment of the identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group segments in order, empty for snippets stored directly under root
    pub fn group(&self) -> &[String] {
        &self.group
    }

    /// Group segments joined back together with `/`
    pub fn group_name(&self) -> String {
        self.group.join("/")
    }

    /// Directory holding the snippet file
    pub fn group_dir(&self) -> &Path {
        &self.group_dir
    }

    /// Absolute location of the snippet file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Map an identifier onto the filesystem under `root`
///
/// Total and side-effect free. Empty segments (from a leading, trailing or
/// doubled `/`) come through as empty path components; callers that care
/// should run [`validate_identifier`] first.
pub fn resolve(root: &Path, identifier: &str) -> Snippet {
    let mut segments: Vec<String> = identifier.split(SEPARATOR).map(str::to_string).collect();
    // split() always yields at least one item, even for ""
    let name = segments.pop().unwrap_or_default();

    let group_dir = segments
        .iter()
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment));
    let path = group_dir.join(&name);

    Snippet {
        identifier: identifier.to_string(),
        name,
        group: segments,
        group_dir,
        path,
    }
}

/// Check that an identifier is safe to resolve
///
/// Rejected:
/// - the empty identifier
/// - empty segments: `"/a"`, `"a/"`, `"a//b"`
/// - `.` and `..` segments, which would alias or escape the group tree
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty() {
        return Err(ChickenheadError::Validation(
            "please enter snippet name".to_string(),
        ));
    }

    for segment in identifier.split(SEPARATOR) {
        match segment {
            "" => {
                return Err(ChickenheadError::Validation(format!(
                    "invalid snippet name '{identifier}': empty group or name segment"
                )));
            }
            "." | ".." => {
                return Err(ChickenheadError::Validation(format!(
                    "invalid snippet name '{identifier}': '{segment}' is not allowed as a segment"
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_group() {
        let root = Path::new("/home/foo/.chickenhead");
        let snippet = resolve(root, "hello.rs");

        assert_eq!(snippet.name(), "hello.rs");
        assert!(snippet.group().is_empty());
        assert_eq!(snippet.group_name(), "");
        assert_eq!(snippet.group_dir(), root);
        assert_eq!(snippet.path(), root.join("hello.rs"));
    }

    #[test]
    fn test_resolve_nested_groups() {
        let root = Path::new("/snippets");
        let snippet = resolve(root, "a/b/c");

        assert_eq!(snippet.name(), "c");
        assert_eq!(snippet.group(), ["a".to_string(), "b".to_string()]);
        assert_eq!(snippet.group_name(), "a/b");
        assert_eq!(snippet.group_dir(), Path::new("/snippets/a/b"));
        assert_eq!(snippet.path(), Path::new("/snippets/a/b/c"));
    }

    #[test]
    fn test_resolve_keeps_dots_in_name() {
        let snippet = resolve(Path::new("/s"), "docker/compose.v2.yml");
        assert_eq!(snippet.name(), "compose.v2.yml");
        assert_eq!(snippet.group_name(), "docker");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let root = Path::new("/s");
        assert_eq!(resolve(root, "x/y"), resolve(root, "x/y"));
        assert_ne!(resolve(root, "x/y").path(), resolve(root, "xy").path());
    }

    #[test]
    fn test_resolve_passes_empty_segments_through() {
        let snippet = resolve(Path::new("/s"), "/a");
        assert_eq!(snippet.group(), ["".to_string()]);
        assert_eq!(snippet.name(), "a");
        assert_eq!(snippet.path(), Path::new("/s/a"));
    }

    #[test]
    fn test_display_is_identifier() {
        let snippet = resolve(Path::new("/s"), "shell/loop.sh");
        assert_eq!(snippet.to_string(), "shell/loop.sh");
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("a").is_ok());
        assert!(validate_identifier("a/b.txt").is_ok());
        assert!(validate_identifier("go/http/server.go").is_ok());
        assert!(validate_identifier(".bashrc").is_ok());

        for bad in ["", "/a", "a/", "a//b", "../a", "a/./b", ".."] {
            let result = validate_identifier(bad);
            assert!(
                matches!(result, Err(ChickenheadError::Validation(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }
}
