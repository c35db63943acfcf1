//! Handle lifecycle: open, lock, read, truncate, release, close

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::Mode;
use crate::chunked::{self, DEFAULT_BUFFER_SIZE};
use crate::encoding;
use crate::error::{LockReadError, Result};

/// Token held while this wrapper owns the advisory exclusive lock.
///
/// The lock itself lives on the file descriptor; the token only records
/// that this wrapper took it. Acquire moves it absent to present,
/// release present to absent, and both transitions are idempotent.
#[derive(Debug)]
struct LockToken;

/// A file handle with an optional advisory exclusive lock on it.
///
/// See the [module docs](super) for the lifecycle and an example.
#[derive(Debug)]
pub struct LockedFileReader {
    path: PathBuf,
    mode: Mode,
    file: Option<File>,
    lock: Option<LockToken>,
}

impl LockedFileReader {
    /// Open `path` in the given mode.
    ///
    /// Writable modes create the file when it does not exist;
    /// [`Mode::ReadOnly`] fails with `FILE_NOT_FOUND` instead.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = mode.open_options().open(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LockReadError::NotFound { path: path.clone() }
            } else {
                LockReadError::Io {
                    source: e,
                    path: path.clone(),
                    operation: "open",
                }
            }
        })?;

        Ok(Self {
            path,
            mode,
            file: Some(file),
            lock: None,
        })
    }

    /// The path this handle was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The mode this handle was opened in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether this wrapper currently holds the exclusive lock.
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Acquire the advisory exclusive whole-file lock.
    ///
    /// Blocks the calling thread until the OS grants the lock; there is
    /// no timeout. A no-op when the lock is already held. Read-only
    /// handles are rejected up front, before touching the OS, because
    /// the underlying lock call would otherwise succeed on a descriptor
    /// that cannot back it up with write access.
    pub fn lock(&mut self) -> Result<()> {
        if self.lock.is_some() {
            return Ok(());
        }
        if !self.mode.is_writable() {
            return Err(LockReadError::ReadOnlyHandle {
                operation: "lock",
                path: self.path.clone(),
            });
        }

        let file = self.file("lock")?;
        file.lock_exclusive().map_err(|e| LockReadError::Io {
            source: e,
            path: self.path.clone(),
            operation: "lock",
        })?;

        self.lock = Some(LockToken);
        Ok(())
    }

    /// Read from the current position to end-of-file and decode the
    /// bytes under the named encoding, using the default chunk size.
    pub fn read(&mut self, encoding: &str) -> Result<String> {
        self.read_with_buffer_size(encoding, DEFAULT_BUFFER_SIZE)
    }

    /// Read from the current position to end-of-file in `buffer_size`
    /// chunks and decode the accumulated bytes under the named encoding.
    ///
    /// The chunk size is a performance knob only and never affects the
    /// returned text. Reading does not require the lock to be held. On
    /// any failure no partial text is returned.
    pub fn read_with_buffer_size(&mut self, encoding: &str, buffer_size: usize) -> Result<String> {
        if buffer_size == 0 {
            return Err(LockReadError::BufferSizeInvalid);
        }
        let encoding = encoding::resolve(encoding)?;

        let file = self.file("read")?;
        let len_hint = file
            .metadata()
            .map_err(|e| LockReadError::Io {
                source: e,
                path: self.path.clone(),
                operation: "metadata",
            })?
            .len();
        let bytes =
            chunked::read_remaining(file, len_hint, buffer_size).map_err(|e| LockReadError::Io {
                source: e,
                path: self.path.clone(),
                operation: "read",
            })?;

        encoding::decode(&bytes, encoding)
    }

    /// Truncate the file to zero length.
    ///
    /// Requires a writable mode. Does not touch lock state; a held lock
    /// stays held. In the sync modes the truncation is flushed to the
    /// storage device before this returns.
    pub fn clear(&mut self) -> Result<()> {
        if !self.mode.is_writable() {
            return Err(LockReadError::ReadOnlyHandle {
                operation: "truncate",
                path: self.path.clone(),
            });
        }

        let file = self.file("truncate")?;
        file.set_len(0).map_err(|e| LockReadError::Io {
            source: e,
            path: self.path.clone(),
            operation: "truncate",
        })?;
        self.mode.sync(file).map_err(|e| LockReadError::Io {
            source: e,
            path: self.path.clone(),
            operation: "sync",
        })?;
        Ok(())
    }

    /// Release a held lock; a no-op when none is held.
    ///
    /// The token is cleared even when the OS release call fails: after
    /// a failed unlock the descriptor's lock state is unknowable, and
    /// keeping the token would make release non-idempotent.
    pub fn release(&mut self) -> Result<()> {
        if self.lock.take().is_none() {
            return Ok(());
        }

        let file = self.file("unlock")?;
        FileExt::unlock(file).map_err(|e| LockReadError::Io {
            source: e,
            path: self.path.clone(),
            operation: "unlock",
        })
    }

    /// [`release`](Self::release) with the error discarded.
    pub fn release_quietly(&mut self) {
        let _ = self.release();
    }

    /// Release the lock quietly, then close the handle.
    ///
    /// Lock-release faults are never surfaced here; a close fault is.
    /// Safe without a prior [`lock`](Self::lock), and a second call is
    /// a no-op.
    pub fn close(&mut self) -> Result<()> {
        self.release_quietly();
        match self.file.take() {
            Some(file) => close_file(file).map_err(|e| LockReadError::Io {
                source: e,
                path: self.path.clone(),
                operation: "close",
            }),
            None => Ok(()),
        }
    }

    fn file(&self, operation: &'static str) -> Result<&File> {
        self.file.as_ref().ok_or_else(|| LockReadError::HandleClosed {
            operation,
            path: self.path.clone(),
        })
    }
}

impl Drop for LockedFileReader {
    fn drop(&mut self) {
        // Same teardown order as close(): lock first, then the handle
        // (dropped with the struct). Close faults are unobservable here.
        self.release_quietly();
    }
}

/// Close the descriptor, surfacing the close(2) result.
///
/// `File`'s own drop discards it.
#[cfg(unix)]
fn close_file(file: File) -> io::Result<()> {
    use std::os::unix::io::IntoRawFd;

    let fd = file.into_raw_fd();
    if unsafe { libc::close(fd) } == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
