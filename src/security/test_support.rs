//! In-memory `SyncTarget` with failure switches, shared by the security tests

use std::io::{self, Cursor, Seek, SeekFrom, Write};

use super::overwrite::SyncTarget;

pub(crate) struct MemFile {
    pub(crate) inner: Cursor<Vec<u8>>,
    pub(crate) syncs: usize,
    pub(crate) fail_seek: bool,
    pub(crate) fail_write_at: Option<u64>,
    /// Zero-based index of the sync call that fails
    pub(crate) fail_sync_at: Option<usize>,
}

impl MemFile {
    /// File of `len` copies of `byte`, cursor left at the end
    pub(crate) fn filled(byte: u8, len: usize) -> Self {
        let mut inner = Cursor::new(vec![byte; len]);
        inner.set_position(len as u64);
        MemFile {
            inner,
            syncs: 0,
            fail_seek: false,
            fail_write_at: None,
            fail_sync_at: None,
        }
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }
}

impl Write for MemFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(limit) = self.fail_write_at {
            if self.inner.position() + buf.len() as u64 > limit {
                return Err(io::Error::other("no space left on device"));
            }
        }
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for MemFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if self.fail_seek {
            return Err(io::Error::other("illegal seek"));
        }
        self.inner.seek(pos)
    }
}

impl SyncTarget for MemFile {
    fn sync(&mut self) -> io::Result<()> {
        if self.fail_sync_at == Some(self.syncs) {
            return Err(io::Error::other("i/o error"));
        }
        self.syncs += 1;
        Ok(())
    }
}
