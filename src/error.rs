//! Error types for overwrite passes, the shred lifecycle and configuration
use std::fmt;
use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure inside a single overwrite pass
#[derive(Error, Debug)]
pub enum OverwriteError {
    #[error("failed to seek to start of file: {0}")]
    Seek(#[source] io::Error),

    #[error("failed to generate random data: {0}")]
    RandomGeneration(#[source] io::Error),

    #[error("failed to write random data at offset {offset}: {source}")]
    Write {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("failed to flush buffered data: {0}")]
    Flush(#[source] io::Error),

    #[error("failed to sync file to storage: {0}")]
    Sync(#[source] io::Error),
}

/// Failure at one step of validate -> open -> overwrite -> close -> unlink
#[derive(Error, Debug)]
pub enum ShredError {
    #[error("failed to stat file {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a regular file: {} ({kind})", .path.display())]
    NotRegularFile { path: PathBuf, kind: FileKind },

    #[error("{} has a negative size", .path.display())]
    NegativeSize { path: PathBuf },

    #[error("failed to open file {} for writing: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to overwrite file {} on pass {pass}: {source}", .path.display())]
    Pass {
        path: PathBuf,
        pass: u32,
        #[source]
        source: OverwriteError,
    },

    #[error("failed to close file {}: {source}", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove file {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ShredError {
    /// Path the failed operation was acting on
    pub fn path(&self) -> &Path {
        match self {
            ShredError::Stat { path, .. }
            | ShredError::NotRegularFile { path, .. }
            | ShredError::NegativeSize { path }
            | ShredError::Open { path, .. }
            | ShredError::Pass { path, .. }
            | ShredError::Close { path, .. }
            | ShredError::Remove { path, .. } => path,
        }
    }

    /// Whether at least one full pass finished before the failure.
    ///
    /// The file is never removed when an error is returned, but its
    /// content may already be destroyed.
    pub fn content_overwritten(&self) -> bool {
        match self {
            ShredError::Pass { pass, .. } => *pass > 0,
            ShredError::Close { .. } | ShredError::Remove { .. } => true,
            _ => false,
        }
    }
}

/// What a rejected path turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Unknown,
}

impl From<FileType> for FileKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_dir() {
            return FileKind::Directory;
        }
        if file_type.is_symlink() {
            return FileKind::Symlink;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;

            if file_type.is_block_device() {
                return FileKind::BlockDevice;
            }
            if file_type.is_char_device() {
                return FileKind::CharDevice;
            }
            if file_type.is_fifo() {
                return FileKind::Fifo;
            }
            if file_type.is_socket() {
                return FileKind::Socket;
            }
        }

        FileKind::Unknown
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Directory => "directory",
            FileKind::Symlink => "symbolic link",
            FileKind::BlockDevice => "block device",
            FileKind::CharDevice => "character device",
            FileKind::Fifo => "fifo",
            FileKind::Socket => "socket",
            FileKind::Unknown => "unknown file type",
        };
        f.write_str(name)
    }
}

/// Configuration could not be loaded or is invalid
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to locate executable: {0}")]
    Executable(#[source] io::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
