//! Stateful locked-file reader
//!
//! This module wraps one open file handle together with an optional
//! advisory exclusive lock on it, exposing the full lifecycle: open,
//! lock, read, truncate, release, close. The lock is whole-file and
//! advisory, so it only constrains other lock-aware processes.
//!
//! Reading never requires the lock; callers that need exclusivity
//! across processes lock first.
//!
//! # Examples
//!
//! ```no_run
//! use lockread::{LockedFileReader, Mode};
//!
//! # fn main() -> lockread::Result<()> {
//! let mut reader = LockedFileReader::open("shared/inbox.txt", Mode::ReadWrite)?;
//! reader.lock()?;
//! let text = reader.read("UTF-8")?;
//! reader.clear()?;
//! reader.close()?;
//! # let _ = text;
//! # Ok(())
//! # }
//! ```

mod handle;
mod mode;

pub use handle::LockedFileReader;
pub use mode::Mode;
