//! File Resolution helper
//!
//! Include targets are resolved against `Options::working_dir` (or the
//! process' current directory) and read whole.

use std::path::{Component, Path, PathBuf};

use crate::config::Options;
use crate::errors::{IncludeError, Result};

/// Absolute, lexically cleaned path of `filename`.
///
/// The file does not need to exist; symlinks are not followed.
pub fn resolve_path(filename: &str, working_dir: Option<&Path>) -> Result<PathBuf> {
    let joined = match working_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    };

    let absolute = if joined.is_absolute() {
        joined
    } else {
        std::env::current_dir()
            .map_err(|e| IncludeError::read(&joined, e))?
            .join(joined)
    };

    Ok(clean(&absolute))
}

/// Read an include target in full
pub fn read_include(filename: &str, options: &Options) -> Result<Vec<u8>> {
    let path = resolve_path(filename, options.working_dir.as_deref())?;
    let content = std::fs::read(&path).map_err(|e| IncludeError::read(&path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read include target");
    Ok(content)
}

/// Drop `.` components and fold `..` into their parent
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against_working_dir() {
        let path = resolve_path("./assets/../index.html", Some(Path::new("/srv/app"))).unwrap();
        assert_eq!(path, PathBuf::from("/srv/app/index.html"));
    }

    #[test]
    fn test_absolute_target() {
        let path = resolve_path("/etc/motd", None).unwrap();
        assert_eq!(path, PathBuf::from("/etc/motd"));
    }

    #[test]
    fn test_relative_to_cwd() {
        let path = resolve_path("x.txt", None).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("x.txt"));
    }

    #[test]
    fn test_read_include() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.bin"), [0u8, 1, 2]).unwrap();
        let options = Options::new().working_dir(dir.path());
        assert_eq!(read_include("data.bin", &options).unwrap(), vec![0, 1, 2]);
        assert!(matches!(
            read_include("nope.bin", &options),
            Err(IncludeError::Read { .. })
        ));
    }
}
