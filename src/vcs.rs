//! Git ignore-rule queries behind a capability trait.
//!
//! The orchestrator only sees [`VcsIgnore`], so tests can drive it with a
//! fake instead of a real repository.

use git2::Repository;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Version-control ignore capability.
pub trait VcsIgnore {
    /// Working-tree root. Rendered paths are made relative to this.
    fn root(&self) -> &Path;

    /// Whether the version-control system excludes `path`.
    /// Must never fail; query errors are treated as "not ignored".
    fn is_ignored(&self, path: &Path) -> bool;
}

/// Git-backed [`VcsIgnore`] using libgit2.
pub struct GitIgnore {
    repo: Repository,
    root: PathBuf,
}

impl GitIgnore {
    /// Search `start` and its ancestors for a git repository.
    ///
    /// Any failure (no repository, corrupt repository, bare repository
    /// without a working tree) is treated uniformly as "no repository".
    pub fn discover(start: &Path) -> Option<Self> {
        let repo = match Repository::discover(start) {
            Ok(repo) => repo,
            Err(e) => {
                debug!("no git repository found from {}: {}", start.display(), e);
                return None;
            }
        };
        let Some(workdir) = repo.workdir() else {
            debug!("repository at {} has no working tree", start.display());
            return None;
        };
        // Canonicalize so strip_prefix agrees with the canonicalized scan root.
        let root = workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf());
        Some(Self { repo, root })
    }
}

impl VcsIgnore for GitIgnore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let rel = match path.strip_prefix(&self.root) {
            Ok(rel) => rel,
            Err(_) => return false, // outside the working tree
        };
        match self.repo.is_path_ignored(rel) {
            Ok(ignored) => ignored,
            Err(e) => {
                warn!("ignore query failed for {}: {}", path.display(), e);
                false
            }
        }
    }
}
