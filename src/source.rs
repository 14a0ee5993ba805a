//! Input file loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SafeviewError};

/// Raw contents of the input file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path the file was read from.
    pub path: PathBuf,
    /// Bytes as read, used to verify the backup.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Contents as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Read the input file, resolving `path` against the current directory.
///
/// A missing path or a directory is reported as
/// [`SafeviewError::InputNotFound`].
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let resolved = absolute(path);

    if !resolved.is_file() {
        return Err(SafeviewError::InputNotFound { path: resolved });
    }

    let bytes = fs::read(&resolved).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SafeviewError::InputNotFound {
            path: resolved.clone(),
        },
        _ => SafeviewError::InputRead {
            path: resolved.clone(),
            source,
        },
    })?;

    debug!(path = %resolved.display(), bytes = bytes.len(), "Read input");
    Ok(SourceFile {
        path: resolved,
        bytes,
    })
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("usuarios.txt");
        fs::write(&path, "ana;123\n").unwrap();

        let source = read_source(&path).unwrap();
        assert_eq!(source.text(), "ana;123\n");
        assert!(source.path.is_absolute());
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let temp = TempDir::new().unwrap();
        let err = read_source(&temp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SafeviewError::InputNotFound { .. }));
    }

    #[test]
    fn directory_is_input_not_found() {
        let temp = TempDir::new().unwrap();
        let err = read_source(temp.path()).unwrap_err();
        assert!(matches!(err, SafeviewError::InputNotFound { .. }));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.txt");
        fs::write(&path, b"jos\xe9;1\n").unwrap();

        let source = read_source(&path).unwrap();
        assert_eq!(source.bytes, b"jos\xe9;1\n");
        assert!(source.text().starts_with("jos\u{fffd};1"));
    }
}
