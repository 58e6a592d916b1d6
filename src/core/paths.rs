//! Cache file location and filename key helpers
//!
//! The cache lives in one file, resolved from the environment in priority
//! order:
//! 1. `HICACHE_FILE` names the exact file
//! 2. `XDG_DATA_HOME` overrides the per-user data directory
//! 3. the platform data directory otherwise

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the exact cache file
pub const CACHE_FILE_ENV: &str = "HICACHE_FILE";

/// Environment variable overriding the base data directory
pub const DATA_HOME_ENV: &str = "XDG_DATA_HOME";

/// Application subdirectory under the data directory
const APP_DIR: &str = "hicache";

/// Cache file name
const CACHE_NAME: &str = "cache.json";

/// Resolve the cache file path from the current environment
pub fn cache_file() -> PathBuf {
    resolve(env::var_os(CACHE_FILE_ENV), env::var_os(DATA_HOME_ENV))
}

/// Resolve the cache file path from explicit override values
fn resolve(file_override: Option<OsString>, data_home: Option<OsString>) -> PathBuf {
    if let Some(file) = file_override {
        return PathBuf::from(file);
    }
    let base = data_home
        .map(PathBuf::from)
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from(".local/share"));
    base.join(APP_DIR).join(CACHE_NAME)
}

/// Final path component of a filename-shaped key
pub fn basename(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename)
}

/// Extension of a filename, leading dot included
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|idx| &filename[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_file_override_wins() {
        let path = resolve(
            Some(OsString::from("/tmp/custom.json")),
            Some(OsString::from("/data")),
        );
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_resolve_data_home_override() {
        let path = resolve(None, Some(OsString::from("/data")));
        assert_eq!(path, PathBuf::from("/data/hicache/cache.json"));
    }

    #[test]
    fn test_resolve_default_location() {
        let path = resolve(None, None);
        assert!(path.ends_with("hicache/cache.json"));
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("src/my.py"), "my.py");
        assert_eq!(basename("CMakeLists.txt"), "CMakeLists.txt");
        assert_eq!(basename(".yaml"), ".yaml");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("my.py"), Some(".py"));
        assert_eq!(extension_of("archive.tar.gz"), Some(".gz"));
        assert_eq!(extension_of("Makefile"), None);
    }
}
