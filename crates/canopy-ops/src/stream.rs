//! Byte-for-byte file copying in bounded chunks.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

/// Chunk size for streaming copies.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Copy `src` to `dest`, creating or truncating the destination.
///
/// Content moves in [`CHUNK_SIZE`] chunks. Interrupted reads and writes
/// are retried, and a short write resumes from the unwritten remainder
/// of its chunk. On failure both handles are released and the partial
/// destination is left in place for the caller to judge.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    let mut reader = File::open(src)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);
    let mut writer = options.open(dest)?;

    let mut buf = [0u8; CHUNK_SIZE];
    let mut copied = 0u64;
    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        write_chunk(&mut writer, &buf[..read])?;
        copied += read as u64;
    }
    writer.flush()?;
    Ok(copied)
}

/// Write a whole chunk, resuming after short or interrupted writes.
fn write_chunk(writer: &mut File, mut chunk: &[u8]) -> io::Result<()> {
    while !chunk.is_empty() {
        match writer.write(chunk) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "destination refused further bytes",
                ));
            }
            Ok(written) => chunk = &chunk[written..],
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
