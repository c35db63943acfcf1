//! Helper binary that locks a file, writes a marker, holds, closes
//!
//! Usage: lock_holder <target_path> <marker_path> <process_id>
//!
//! Used to test cross-process exclusive locking. It opens the target
//! read-write, takes the exclusive lock, appends a marker line to the
//! marker file, holds the lock briefly, then closes. Multiple processes
//! running this should execute their critical sections sequentially.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use lockread::{LockedFileReader, Mode};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: lock_holder <target_path> <marker_path> <process_id>");
        std::process::exit(1);
    }

    let target_path = PathBuf::from(&args[1]);
    let marker_path = PathBuf::from(&args[2]);
    let process_id = &args[3];

    let mut reader = LockedFileReader::open(&target_path, Mode::ReadWrite)
        .with_context(|| format!("opening {}", target_path.display()))?;

    // Blocks until the lock is granted
    reader.lock().context("acquiring exclusive lock")?;

    // Write marker with process ID
    let mut marker = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&marker_path)
        .with_context(|| format!("opening {}", marker_path.display()))?;
    writeln!(marker, "process_{} acquired lock", process_id).context("writing marker")?;

    // Hold the lock for a bit to force contenders to wait
    std::thread::sleep(Duration::from_millis(100));

    reader.close().context("closing handle")?;
    println!("Process {} completed", process_id);
    Ok(())
}
