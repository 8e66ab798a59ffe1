//! Secure deletion of a single regular file

use std::fs;
use std::io;
use std::num::NonZeroU32;
use std::path::Path;

use tracing::{debug, info, info_span, warn};

use super::overwrite::{SyncTarget, overwrite_file_contents};
use crate::error::{FileKind, ShredError};
use crate::utils::platform::{close_file, open_for_writing};

/// Overwrite passes run by default
pub const DEFAULT_PASSES: NonZeroU32 = NonZeroU32::new(3).unwrap();

/// Overwrite-then-unlink with a fixed number of random passes
///
/// Stateless apart from the pass count; one value can shred any number
/// of files, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shredder {
    passes: NonZeroU32,
}

impl Default for Shredder {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
        }
    }
}

impl Shredder {
    /// Shredder running `DEFAULT_PASSES` passes
    pub fn new() -> Self {
        Self::default()
    }

    /// Shredder running `passes` passes
    pub fn with_passes(passes: NonZeroU32) -> Self {
        Self { passes }
    }

    /// Number of overwrite passes per file
    pub fn passes(&self) -> u32 {
        self.passes.get()
    }

    /// Securely delete the file at `path`
    ///
    /// Process:
    /// 1. Stat without following symlinks
    /// 2. Reject anything that is not a regular file
    /// 3. Reject a size that does not fit a signed file offset
    /// 4. Open write-only
    /// 5. Overwrite with random data, once per pass
    /// 6. Close, surfacing the close result
    /// 7. Remove the directory entry
    ///
    /// The size is read once in step 1. Callers must keep other writers
    /// away from the file until this returns.
    ///
    /// On any error the file is left in place, possibly already overwritten.
    pub fn shred<P: AsRef<Path>>(&self, path: P) -> Result<(), ShredError> {
        let path = path.as_ref();
        let span = info_span!("shred", path = %path.display(), passes = self.passes());
        let _enter = span.enter();

        let result = self.run(path);
        match &result {
            Ok(()) => info!("file shredded"),
            Err(e) => warn!(error = %e, overwritten = e.content_overwritten(), "shred failed"),
        }
        result
    }

    fn run(&self, path: &Path) -> Result<(), ShredError> {
        let metadata = fs::symlink_metadata(path).map_err(|source| ShredError::Stat {
            path: path.to_path_buf(),
            source,
        })?;

        let file_type = metadata.file_type();
        if !file_type.is_file() {
            return Err(ShredError::NotRegularFile {
                path: path.to_path_buf(),
                kind: FileKind::from(file_type),
            });
        }

        let size = checked_size(metadata.len()).ok_or_else(|| ShredError::NegativeSize {
            path: path.to_path_buf(),
        })?;

        let file = open_for_writing(path).map_err(|source| ShredError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.destroy(path, file, size, close_file)
    }

    /// Overwrite, close, then unlink an already opened file
    ///
    /// The unlink is reached only when every pass and the close succeeded.
    fn destroy<F: SyncTarget>(
        &self,
        path: &Path,
        mut file: F,
        size: u64,
        close: impl FnOnce(F) -> io::Result<()>,
    ) -> Result<(), ShredError> {
        overwrite_passes(&mut file, size, self.passes(), path)?;

        close(file).map_err(|source| ShredError::Close {
            path: path.to_path_buf(),
            source,
        })?;

        // Only the directory entry goes; journal and cached directory blocks may
        // still name the file.
        fs::remove_file(path).map_err(|source| ShredError::Remove {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

/// Run `passes` overwrite passes, stopping at the first failure
fn overwrite_passes<F: SyncTarget>(
    file: &mut F,
    size: u64,
    passes: u32,
    path: &Path,
) -> Result<(), ShredError> {
    for pass in 0..passes {
        debug!(pass, size, "overwriting");
        overwrite_file_contents(file, size).map_err(|source| ShredError::Pass {
            path: path.to_path_buf(),
            pass,
            source,
        })?;
    }
    Ok(())
}

/// Securely delete the file at `path` with the default pass count
pub fn shred<P: AsRef<Path>>(path: P) -> Result<(), ShredError> {
    Shredder::default().shred(path)
}

/// File length as reported by metadata, if it is a valid signed offset
fn checked_size(len: u64) -> Option<u64> {
    i64::try_from(len).ok().map(|size| size as u64)
}
