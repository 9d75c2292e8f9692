//! Output destinations for structured records.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// A shared, lock-guarded writer.
///
/// Clones point at the same underlying writer, so the console destination can
/// back both a standalone logger and a tee without opening stdout twice.
#[derive(Clone)]
pub struct Destination {
    label: Arc<str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Destination {
    /// Process standard output.
    pub fn stdout() -> Self {
        Self::from_writer("stdout", io::stdout())
    }

    /// Wrap an arbitrary writer.
    pub fn from_writer<W>(label: &str, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            label: Arc::from(label),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Open `path` for appending, creating it if missing.
    ///
    /// New files get mode `0o666` before the process umask is applied.
    pub fn open_append(path: &Path) -> io::Result<Self> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }

        let file = options.open(path)?;
        Ok(Self::from_writer(&path.to_string_lossy(), file))
    }

    /// Human-readable name of the destination.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Write one complete record while holding the lock.
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        // A panic in another writer must not silence this sink for good.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(record)?;
        writer.flush()
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.log");
        fs::write(&path, "existing\n").unwrap();

        let destination = Destination::open_append(&path).unwrap();
        destination.write_record(b"first\n").unwrap();
        destination.clone().write_record(b"second\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "existing\nfirst\nsecond\n");
        assert_eq!(destination.label(), path.to_string_lossy());
    }

    #[test]
    fn test_open_append_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("server.log");

        assert!(Destination::open_append(&path).is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_append_mode_respects_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.log");
        Destination::open_append(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // Never wider than rw-rw-rw-, never executable.
        assert_eq!(mode & !0o666, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
