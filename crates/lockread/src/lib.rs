// Core modules
pub mod error;
pub mod oneshot;
pub mod reader;

mod chunked;
mod encoding;

// Re-export commonly used types
pub use chunked::DEFAULT_BUFFER_SIZE;
pub use error::{LockReadError, Result};
pub use oneshot::read_locked;
pub use reader::{LockedFileReader, Mode};
