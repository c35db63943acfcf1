use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockReadError {
    // Argument errors
    #[error("BUFFER_SIZE_INVALID: buffer size must be positive")]
    BufferSizeInvalid,

    #[error("ENCODING_UNSUPPORTED: '{0}' is not a known encoding label")]
    EncodingUnsupported(String),

    // Open errors
    #[error("FILE_NOT_FOUND: {}", path.display())]
    NotFound { path: PathBuf },

    // Handle-state errors
    #[error("HANDLE_READ_ONLY: cannot {operation} a handle opened in read-only mode ({})", path.display())]
    ReadOnlyHandle {
        operation: &'static str,
        path: PathBuf,
    },

    #[error("HANDLE_CLOSED: cannot {operation} a closed handle ({})", path.display())]
    HandleClosed {
        operation: &'static str,
        path: PathBuf,
    },

    // OS-level errors
    #[error("IO_ERROR: {operation} on {}: {source}", path.display())]
    Io {
        source: io::Error,
        path: PathBuf,
        operation: &'static str,
    },

    // Decode errors
    #[error("DECODE_FAILED: byte stream is not valid {encoding}")]
    Decode { encoding: &'static str },
}

pub type Result<T> = std::result::Result<T, LockReadError>;
