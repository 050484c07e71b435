//! Custom ignore-pattern matching over display-root-relative paths.

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::warn;

/// Build a GlobSet from user-supplied patterns.
/// Invalid patterns are skipped with a warning, never fatal.
/// An empty pattern list builds a set that matches nothing.
pub fn build_ignore_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => {
                invalid.push(pattern.clone());
            }
        }
    }
    if !invalid.is_empty() {
        warn!("invalid ignore pattern(s), skipped: {:?}", invalid);
    }
    builder.build().unwrap_or_else(|e| {
        warn!("failed to build ignore set: {}", e);
        GlobSet::empty()
    })
}
