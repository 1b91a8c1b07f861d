//! Storage path resolution.
//!
//! Every stored file is addressed by a caller-supplied name. Names are joined
//! onto the storage root only after a lexical normalization pass:
//!
//! ```text
//! "report.txt"          -> {root}/report.txt
//! "./a/../report.txt"   -> {root}/report.txt
//! "a/b.txt"             -> {root}/a/b.txt
//! "../../etc/passwd"    -> PathError::Traversal
//! "/etc/passwd"         -> PathError::Traversal
//! "" or "." or "a/.."   -> PathError::Empty
//! ```
//!
//! The check is purely lexical. Symlinks that already exist inside the root
//! are followed by the filesystem like any other entry.

use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::PathError;

/// Resolves file names against a fixed storage root.
#[derive(Debug, Clone)]
pub struct StoragePathResolver {
    base: PathBuf,
}

impl StoragePathResolver {
    /// Create a resolver rooted at `base`.
    ///
    /// The directory is not touched; call [`ensure_base`](Self::ensure_base)
    /// at startup to create it.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The storage root all names are resolved against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve `name` to a path inside the storage root.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, PathError> {
        resolve(&self.base, name)
    }

    /// Create the storage root (and any missing parents) if it does not exist.
    pub fn ensure_base(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.base)
    }
}

/// Resolve `name` against `base`, rejecting anything that would leave `base`.
///
/// `..` segments are allowed as long as they only cancel segments introduced
/// earlier in the same name. Absolute paths and drive prefixes are always
/// rejected.
pub fn resolve(base: &Path, name: &str) -> Result<PathBuf, PathError> {
    if name.is_empty() {
        return Err(PathError::Empty);
    }

    let mut segments: Vec<&OsStr> = Vec::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(segment) => segments.push(segment),
            Component::CurDir => {}
            Component::ParentDir => {
                if segments.pop().is_none() {
                    debug!(name, "Rejected file name: parent segment escapes root");
                    return Err(PathError::Traversal(name.to_string()));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                debug!(name, "Rejected file name: absolute path");
                return Err(PathError::Traversal(name.to_string()));
            }
        }
    }

    if segments.is_empty() {
        return Err(PathError::Empty);
    }

    let mut path = base.to_path_buf();
    path.extend(segments);
    Ok(path)
}

// =============================================================================
// Tests
// =============================================================================
