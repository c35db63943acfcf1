//! Open modes and their durability rules

use std::fs::{File, OpenOptions};
use std::io;

/// Open mode of a [`LockedFileReader`](super::LockedFileReader) handle.
///
/// The mode governs which operations are permitted (locking and
/// truncation need write access) and how durable mutations are: the
/// two sync variants flush every mutation to the storage device before
/// the mutating call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read access only. Locking and truncation are rejected.
    ReadOnly,
    /// Read and write access. The file is created if it does not exist.
    ReadWrite,
    /// Like [`Mode::ReadWrite`], with every content and metadata update
    /// flushed synchronously to the storage device.
    ReadWriteSyncAll,
    /// Like [`Mode::ReadWrite`], with every content update flushed
    /// synchronously to the storage device.
    ReadWriteSyncContent,
}

impl Mode {
    /// Whether handles opened in this mode may lock and truncate.
    pub fn is_writable(self) -> bool {
        !matches!(self, Mode::ReadOnly)
    }

    pub(crate) fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(true);
        if self.is_writable() {
            options.write(true).create(true);
        }
        options
    }

    /// Flush a completed mutation according to the mode's durability rule.
    pub(crate) fn sync(self, file: &File) -> io::Result<()> {
        match self {
            Mode::ReadWriteSyncAll => file.sync_all(),
            Mode::ReadWriteSyncContent => file.sync_data(),
            Mode::ReadOnly | Mode::ReadWrite => Ok(()),
        }
    }
}
