//! Platform-specific file handling
//!
//! Open without following symlinks, and close with the OS result surfaced

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Open an existing file for writing only
///
/// On Unix the final path component must not be a symlink, so a link
/// swapped in after the type check is refused by the kernel.
pub fn open_for_writing(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}

/// Close a file and report the result of the close itself
///
/// Dropping a `File` discards close errors, which can carry deferred
/// write failures on some filesystems (NFS in particular).
#[cfg(unix)]
pub fn close_file(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    let fd = file.into_raw_fd();

    // SAFETY: fd was released from an owned File and is closed exactly once here
    let ret = unsafe { libc::close(fd) };
    if ret == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
pub fn close_file(file: File) -> io::Result<()> {
    file.sync_all()?;
    drop(file);
    Ok(())
}
