//! Single overwrite pass: fresh random data over the first `length` bytes

use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};

use rand::TryRngCore;
use rand::rngs::OsRng;
use tracing::trace;

use crate::error::OverwriteError;

/// Chunk size for buffered random writes
pub const BLOCK_SIZE: usize = 4096;

/// A writable, seekable file that can force its contents to stable storage
pub trait SyncTarget: Write + Seek {
    /// Durability barrier, called once the buffered data is flushed
    fn sync(&mut self) -> io::Result<()>;
}

impl SyncTarget for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Overwrite `length` bytes from the start of `file` with random data
///
/// Process:
/// 1. Seek to offset 0
/// 2. Fill and write `BLOCK_SIZE` chunks from the OS RNG; the last chunk
///    is cut to the remaining byte count
/// 3. Flush the buffered writer
/// 4. Sync to stable storage
///
/// The file is never extended or truncated. A zero length writes nothing
/// but still syncs.
pub fn overwrite_file_contents<F: SyncTarget>(
    file: &mut F,
    length: u64,
) -> Result<(), OverwriteError> {
    file.seek(SeekFrom::Start(0)).map_err(OverwriteError::Seek)?;

    let mut block = [0u8; BLOCK_SIZE];
    let mut written: u64 = 0;

    {
        let mut writer = BufWriter::with_capacity(BLOCK_SIZE, &mut *file);

        while written < length {
            let chunk = (length - written).min(BLOCK_SIZE as u64) as usize;
            let data = &mut block[..chunk];

            OsRng
                .try_fill_bytes(data)
                .map_err(|e| OverwriteError::RandomGeneration(io::Error::other(e)))?;

            writer
                .write_all(data)
                .map_err(|source| OverwriteError::Write { offset: written, source })?;

            written += chunk as u64;
        }

        writer.flush().map_err(OverwriteError::Flush)?;
    }

    file.sync().map_err(OverwriteError::Sync)?;

    trace!(bytes = written, "overwrite pass synced");
    Ok(())
}
