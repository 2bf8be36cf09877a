// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for an empty command and invalid glob patterns.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Directory that relative paths in a config file are resolved against.
///
/// A bare filename like `Coalescer.toml` has an empty parent; fall back to
/// the current working directory in that case.
pub fn config_base_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Resolve an optional config path against `base`.
pub fn resolve_path(base: &Path, path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => base.join(p),
        None => base.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_filename_resolves_to_current_dir() {
        let base = config_base_dir(Path::new("Coalescer.toml"));
        assert_eq!(base, std::env::current_dir().unwrap());
    }

    #[test]
    fn nested_config_resolves_to_parent() {
        let base = config_base_dir(Path::new("configs/Coalescer.toml"));
        assert_eq!(base, PathBuf::from("configs"));
    }

    #[test]
    fn relative_paths_join_base() {
        let base = Path::new("/project");
        assert_eq!(resolve_path(base, None), PathBuf::from("/project"));
        assert_eq!(
            resolve_path(base, Some(Path::new("src"))),
            PathBuf::from("/project/src")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_are_kept() {
        let base = Path::new("/project");
        assert_eq!(
            resolve_path(base, Some(Path::new("/elsewhere"))),
            PathBuf::from("/elsewhere")
        );
    }
}
