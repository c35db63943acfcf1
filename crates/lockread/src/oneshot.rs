//! One-call locked read
//!
//! Opens a file read-write, takes the advisory exclusive lock, reads
//! everything, decodes it, and releases the lock and handle before
//! returning, on every exit path and in reverse order of acquisition.
//! Deliberately independent of the stateful reader: both sit directly
//! on the same OS locking and read primitives.

use std::fs::{File, OpenOptions};
use std::path::Path;

use fs2::FileExt;

use crate::chunked;
use crate::encoding;
use crate::error::{LockReadError, Result};

/// Releases the advisory lock on scope exit. The error is discarded so
/// a cleanup fault never masks the primary one.
struct UnlockOnDrop<'a>(&'a File);

impl Drop for UnlockOnDrop<'_> {
    fn drop(&mut self) {
        let _ = FileExt::unlock(self.0);
    }
}

/// Read the whole file as text while holding an exclusive lock for the
/// duration of the read.
///
/// The file is opened read-write (created when absent) because the
/// lock needs write access behind it. Blocks until the OS grants the
/// lock. The decoded text is byte-identical for every positive
/// `buffer_size`; the chunk size is a performance knob only.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> lockread::Result<()> {
/// let text = lockread::read_locked("shared/inbox.txt", "UTF-8", 4096)?;
/// # let _ = text;
/// # Ok(())
/// # }
/// ```
pub fn read_locked(path: impl AsRef<Path>, encoding: &str, buffer_size: usize) -> Result<String> {
    let path = path.as_ref();

    // Argument faults surface before anything is opened or created.
    if buffer_size == 0 {
        return Err(LockReadError::BufferSizeInvalid);
    }
    let encoding = encoding::resolve(encoding)?;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)
        .map_err(|e| LockReadError::Io {
            source: e,
            path: path.to_path_buf(),
            operation: "open",
        })?;

    file.lock_exclusive().map_err(|e| LockReadError::Io {
        source: e,
        path: path.to_path_buf(),
        operation: "lock",
    })?;
    // Declared after `file` so it drops first: unlock, then close.
    let _lock = UnlockOnDrop(&file);

    let len_hint = file
        .metadata()
        .map_err(|e| LockReadError::Io {
            source: e,
            path: path.to_path_buf(),
            operation: "metadata",
        })?
        .len();
    let bytes =
        chunked::read_remaining(&file, len_hint, buffer_size).map_err(|e| LockReadError::Io {
            source: e,
            path: path.to_path_buf(),
            operation: "read",
        })?;

    encoding::decode(&bytes, encoding)
}
