//! Overwrite a regular file with random data, then unlink it
//!
//! Best effort only: flash wear levelling, filesystem journals and
//! snapshots can keep copies of the data regardless of pass count.
//!
//! ```no_run
//! shred::shred("secrets.txt")?;
//! # Ok::<(), shred::ShredError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod security;
pub mod utils;

pub use error::{ConfigError, FileKind, OverwriteError, ShredError};
pub use security::{
    BLOCK_SIZE, DEFAULT_PASSES, Shredder, SyncTarget, overwrite_file_contents, shred,
};
