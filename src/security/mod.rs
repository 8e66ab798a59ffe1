/// Security module - Random overwrite passes and secure deletion
pub mod destruct;
pub mod overwrite;

pub use destruct::{DEFAULT_PASSES, Shredder, shred};
pub use overwrite::{BLOCK_SIZE, SyncTarget, overwrite_file_contents};

#[cfg(test)]
mod test_support;
