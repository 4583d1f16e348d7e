//! File access for the driver
//!
//! The driver only talks to [`FileAccessor`], so tests can run the whole
//! batch pipeline against an in-memory file set.

use std::fs;
use std::io;
use std::path::Path;

/// Storage the driver reads decklists from and writes them back to
pub trait FileAccessor: Sync {
    /// Ok if `path` is a readable regular file, and writable when asked
    fn check_access(&self, path: &Path, writable: bool) -> io::Result<()>;

    fn read_text(&self, path: &Path) -> io::Result<String>;

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// [`FileAccessor`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAccessor;

impl FileAccessor for FsAccessor {
    fn check_access(&self, path: &Path, writable: bool) -> io::Result<()> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        fs::File::open(path)?;
        if writable {
            // Opening for write without truncate leaves the content alone.
            fs::OpenOptions::new().write(true).open(path)?;
        }
        Ok(())
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_check_access_existing_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("deck.txt");
        fs::write(&path, "4 Lightning Bolt\n").expect("write");

        assert!(FsAccessor.check_access(&path, false).is_ok());
        assert!(FsAccessor.check_access(&path, true).is_ok());
    }

    #[test]
    fn test_check_access_missing_file() {
        let dir = tempdir().expect("tempdir");
        let err = FsAccessor
            .check_access(&dir.path().join("missing.txt"), false)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_check_access_rejects_directory() {
        let dir = tempdir().expect("tempdir");
        let err = FsAccessor.check_access(dir.path(), false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_read_write_roundtrip_keeps_crlf() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("deck.txt");
        FsAccessor
            .write_text(&path, "1 Island\r\n1 Forest\r\n")
            .expect("write");
        assert_eq!(
            FsAccessor.read_text(&path).expect("read"),
            "1 Island\r\n1 Forest\r\n"
        );
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("deck.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).expect("write");
        let err = FsAccessor.read_text(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
