//! Timestamped backups of the input file.
//!
//! A backup is a byte-identical copy written next to the input as
//! `<stem>.backup-<YYYYMMDD>-<HHMMSS><ext>`. After copying, the SHA-256 of
//! the backup is checked against the bytes that were read.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock, STAMP_FORMAT};

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{Result, SafeviewError};
use crate::source::SourceFile;

/// A completed, verified backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    /// Where the copy was written.
    pub path: PathBuf,
    /// Hex SHA-256 of the copied bytes.
    pub sha256: String,
}

/// Path of the backup for `source` taken at `stamp`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use safeview::backup::backup_path;
///
/// let path = backup_path(Path::new("/data/usuarios.txt"), "20261019-142501");
/// assert_eq!(path, Path::new("/data/usuarios.backup-20261019-142501.txt"));
///
/// let path = backup_path(Path::new("/data/records"), "20261019-142501");
/// assert_eq!(path, Path::new("/data/records.backup-20261019-142501"));
/// ```
pub fn backup_path(source: &Path, stamp: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension() {
        Some(ext) => format!("{}.backup-{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}.backup-{}", stem, stamp),
    };
    source.with_file_name(name)
}

/// Copy `source` next to itself and verify the copy.
pub fn create_backup(source: &SourceFile, clock: &dyn Clock) -> Result<Backup> {
    let path = backup_path(&source.path, &clock.stamp());
    debug!(from = %source.path.display(), to = %path.display(), "Creating backup");

    fs::copy(&source.path, &path).map_err(|e| SafeviewError::BackupFailed {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let copied = fs::read(&path).map_err(|e| SafeviewError::BackupFailed {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let expected = digest(&source.bytes);
    let actual = digest(&copied);
    if expected != actual {
        return Err(SafeviewError::BackupFailed {
            path,
            message: "backup contents differ from the input that was read".to_string(),
        });
    }

    info!(path = %path.display(), "Backup created");
    Ok(Backup {
        path,
        sha256: actual,
    })
}

fn digest(bytes: &[u8]) -> String {
    hex::encode(&Sha256::digest(bytes)[..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::read_source;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(14, 25, 1)
                .unwrap(),
        )
    }

    #[test]
    fn backup_path_keeps_last_extension() {
        let path = backup_path(Path::new("dir/archive.tar.gz"), "20260101-000000");
        assert_eq!(path, Path::new("dir/archive.tar.backup-20260101-000000.gz"));
    }

    #[test]
    fn backup_path_for_dotfile() {
        let path = backup_path(Path::new("dir/.records"), "20260101-000000");
        assert_eq!(path, Path::new("dir/.records.backup-20260101-000000"));
    }

    #[test]
    fn backup_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("usuarios.txt");
        let content = b"ana;123\r\nbad line\n\xff\xfe;x\n";
        fs::write(&input, content).unwrap();

        let source = read_source(&input).unwrap();
        let backup = create_backup(&source, &clock()).unwrap();

        assert_eq!(
            backup.path,
            temp.path().join("usuarios.backup-20261019-142501.txt")
        );
        assert_eq!(fs::read(&backup.path).unwrap(), content);
        assert_eq!(backup.sha256, digest(content));
    }

    #[test]
    fn empty_file_is_backed_up() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("empty.txt");
        fs::write(&input, "").unwrap();

        let source = read_source(&input).unwrap();
        let backup = create_backup(&source, &clock()).unwrap();
        assert!(backup.path.exists());
        assert!(fs::read(&backup.path).unwrap().is_empty());
    }

    #[test]
    fn changed_input_fails_verification() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("usuarios.txt");
        fs::write(&input, "ana;123\n").unwrap();
        let source = read_source(&input).unwrap();

        fs::write(&input, "ana;999\n").unwrap();
        let err = create_backup(&source, &clock()).unwrap_err();
        assert!(matches!(err, SafeviewError::BackupFailed { .. }));
    }

    #[test]
    fn missing_source_fails_backup() {
        let temp = TempDir::new().unwrap();
        let source = SourceFile {
            path: temp.path().join("gone.txt"),
            bytes: Vec::new(),
        };
        let err = create_backup(&source, &clock()).unwrap_err();
        assert!(matches!(err, SafeviewError::BackupFailed { .. }));
    }
}
