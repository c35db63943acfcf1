//! Chunked read-to-end shared by the stateful reader and the one-shot
//! helper.

use std::fs::File;
use std::io::{self, Read};

/// Chunk size used when the caller does not pick one.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Upper bound on the capacity reserved up front from the file-length
/// hint. The accumulator grows past it on demand; the hint only avoids
/// repeated reallocation for typical files.
const MAX_PREALLOCATION: u64 = 1024 * 1024;

/// Read from the handle's current position to end-of-file in
/// `buffer_size` chunks. The chunk size never affects the returned
/// bytes, only how many read calls are issued.
pub(crate) fn read_remaining(
    file: &File,
    len_hint: u64,
    buffer_size: usize,
) -> io::Result<Vec<u8>> {
    debug_assert!(buffer_size > 0);

    let mut out = Vec::with_capacity(len_hint.min(MAX_PREALLOCATION) as usize);
    let mut chunk = vec![0u8; buffer_size];
    let mut handle = file;
    loop {
        match handle.read(&mut chunk) {
            Ok(0) => return Ok(out),
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};

    #[test]
    fn test_read_remaining_with_tiny_buffer() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"hello world").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        let bytes = read_remaining(&file, 11, 3).unwrap();
        assert_eq!(bytes, b"hello world");
    }

    #[test]
    fn test_read_remaining_empty_file() {
        let file = tempfile::tempfile().unwrap();
        let bytes = read_remaining(&file, 0, DEFAULT_BUFFER_SIZE).unwrap();
        assert!(bytes.is_empty(), "Empty file should yield no bytes");
    }

    #[test]
    fn test_read_remaining_starts_at_current_position() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.seek(SeekFrom::Start(4)).unwrap();

        let bytes = read_remaining(&file, 10, 2).unwrap();
        assert_eq!(bytes, b"456789");
    }
}
