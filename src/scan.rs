//! Tree traversal and document assembly.

use globset::GlobSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::render::{render_file, ByteSniffer, ContentSniffer};
use crate::vcs::{GitIgnore, VcsIgnore};

/// Fixed top-level heading of every generated document.
pub const DOCUMENT_HEADER: &str = "# PROJECT CONTEXT\n\n";

/// The only error a scan can surface; everything else degrades in place.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory.
    #[error("{}: invalid scan root", .path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Configuration for a scan.
pub struct ScanConfig {
    /// Custom glob patterns matched against display-root-relative paths.
    pub ignore_patterns: GlobSet,
}

/// Scan `root` and return the assembled Markdown document.
///
/// Discovers an enclosing git repository (if any) for ignore rules and the
/// display root, then delegates to [`scan_with`].
pub fn scan(root: &Path, config: &ScanConfig) -> Result<String, ScanError> {
    let abs_root = resolve_root(root)?;
    let vcs = GitIgnore::discover(&abs_root);
    scan_with(
        &abs_root,
        config,
        vcs.as_ref().map(|v| v as &dyn VcsIgnore),
        &ByteSniffer,
    )
}

/// Scan with explicit collaborators, so tests can supply fakes.
///
/// Traversal is depth-first pre-order with lexical order inside each
/// directory; hidden entries are pruned before descent, so a hidden
/// directory's contents are never visited regardless of ignore rules.
pub fn scan_with(
    root: &Path,
    config: &ScanConfig,
    vcs: Option<&dyn VcsIgnore>,
    sniffer: &dyn ContentSniffer,
) -> Result<String, ScanError> {
    let abs_root = resolve_root(root)?;

    // Display root: repository working tree if found, else the scan root.
    // Never mixed within one scan.
    let display_root = vcs
        .map(|v| v.root().to_path_buf())
        .unwrap_or_else(|| abs_root.clone());

    let mut document = String::from(DOCUMENT_HEADER);

    let walker = WalkDir::new(&abs_root).sort_by_file_name();
    let iter = walker
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry_result in iter {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable directory or similar: skip, never abort.
                warn!("walk error: {}", e);
                continue;
            }
        };
        if entry.depth() == 0 || entry.file_type().is_dir() {
            continue;
        }
        // Symlinks to directories are listed but never descended; skip them.
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }

        let abs_path = entry.path();
        let rel_path = abs_path.strip_prefix(&display_root).unwrap_or(abs_path);

        if let Some(vcs) = vcs {
            if vcs.is_ignored(abs_path) {
                debug!("vcs-ignored: {}", rel_path.display());
                continue;
            }
        }
        if config.ignore_patterns.is_match(rel_path) {
            debug!("pattern-ignored: {}", rel_path.display());
            continue;
        }

        document.push_str(&render_file(abs_path, rel_path, sniffer));
    }

    Ok(document)
}

fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let abs_root = root.canonicalize().map_err(|e| ScanError::InvalidRoot {
        path: root.to_path_buf(),
        source: Some(e),
    })?;
    if !abs_root.is_dir() {
        return Err(ScanError::InvalidRoot {
            path: abs_root,
            source: None,
        });
    }
    Ok(abs_root)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
