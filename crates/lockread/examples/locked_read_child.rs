//! Helper binary that performs a one-shot locked read
//!
//! Usage: locked_read_child <path> <encoding> <buffer_size>
//!
//! Reads the whole file under an exclusive lock and prints the decoded
//! text verbatim to stdout, so the parent test can compare it against
//! the expected contents.

use std::env;

use anyhow::Context;
use lockread::read_locked;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: locked_read_child <path> <encoding> <buffer_size>");
        std::process::exit(1);
    }

    let buffer_size: usize = args[3].parse().context("buffer_size must be a number")?;

    let text = read_locked(&args[1], &args[2], buffer_size)
        .with_context(|| format!("locked read of {}", args[1]))?;
    print!("{}", text);
    Ok(())
}
