//! Rotating line writer for the trace export file.
//!
//! Before each write the file size is checked against a [`RotationPolicy`]. An
//! oversized file is renamed to `<name>.<utc timestamp>-<seq>` and a fresh file is
//! started; only the newest `max_backups` rotated files are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// Size and retention limits for a [`FileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the file grows past this many bytes.
    pub max_bytes: u64,
    /// Rotated files kept after pruning.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never fails.
/// The exporter that owns this writer must be `Send + Sync`, hence the `Mutex`.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    file: Mutex<Option<File>>,
    rotations: AtomicU32,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            file: Mutex::new(None),
            rotations: AtomicU32::new(0),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening, writing or flushing fails, or if the lock was
    /// poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::other("trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.policy.max_bytes)
    }

    /// Renames the current file to a timestamped backup and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        if self.file_path.exists() {
            fs::rename(&self.file_path, self.next_backup_path())?;
        }
        self.prune_backups()
    }

    /// Backup path stamped with the current UTC time and a rotation counter.
    fn next_backup_path(&self) -> PathBuf {
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
        let seq = self.rotations.fetch_add(1, Ordering::Relaxed);
        append_extension(&self.file_path, &format!("{stamp}-{seq:04}"))
    }

    /// Lists rotated files for this writer, newest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::other("trace file has no parent directory"))?;
        let file_name = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::other("trace file name is not valid UTF-8"))?;
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Stamps and counters are zero-padded, so name order is age order.
        backups.sort_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        for old in self.backups()?.iter().skip(self.policy.max_backups) {
            if let Err(e) = fs::remove_file(old) {
                tracing::debug!(path = ?old, error = %e, "failed to remove old trace backup");
            }
        }
        Ok(())
    }
}

/// `trace.json` + `stamp` → `trace.json.stamp`.
fn append_extension(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".");
    os.push(suffix);
    PathBuf::from(os)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
