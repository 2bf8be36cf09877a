// src/watch/filter.rs

use std::fmt;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::WatchSection;
use crate::errors::Result;

/// Compiled include/exclude glob patterns.
///
/// Patterns are relative to the watch root; [`matches`](Self::matches) expects
/// forward-slash relative paths such as `"src/main.rs"`.
#[derive(Clone)]
pub struct WatchFilter {
    /// `None` when no include patterns were given: everything is included.
    include: Option<GlobSet>,
    exclude: GlobSet,
    patterns: usize,
}

impl fmt::Debug for WatchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchFilter")
            .field("include_all", &self.include.is_none())
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}

impl WatchFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let include_set = if include.is_empty() {
            None
        } else {
            Some(build_globset(include)?)
        };

        Ok(Self {
            include: include_set,
            exclude: build_globset(exclude)?,
            patterns: include.len() + exclude.len(),
        })
    }

    pub fn from_section(section: &WatchSection) -> Result<Self> {
        Self::new(&section.include, &section.exclude)
    }

    /// A filter that accepts every path.
    pub fn everything() -> Self {
        Self {
            include: None,
            exclude: GlobSet::empty(),
            patterns: 0,
        }
    }

    pub fn matches(&self, rel_path: &str) -> bool {
        if self.exclude.is_match(rel_path) {
            return false;
        }
        match &self.include {
            Some(include) => include.is_match(rel_path),
            None => true,
        }
    }

    /// Match an absolute event path against the filter, relative to `root`.
    /// Paths outside `root` never match.
    pub fn matches_under(&self, root: &Path, path: &Path) -> bool {
        relative_str(root, path).is_some_and(|rel| self.matches(&rel))
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat)?);
    }
    Ok(builder.build()?)
}

/// `path` relative to `root` with forward slashes, or `None` if unrelated.
///
/// Falls back to comparing canonical paths, since some platforms report
/// events under a different absolute prefix (e.g. `/private/var` on macOS).
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(rel.to_string_lossy().replace('\\', "/"));
    }

    let root_canon = root.canonicalize().ok()?;
    let path_canon = path.canonicalize().ok()?;
    path_canon
        .strip_prefix(&root_canon)
        .ok()
        .map(|rel| rel.to_string_lossy().replace('\\', "/"))
}
