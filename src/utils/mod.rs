/// Utilities - platform file handling and logging setup
pub mod platform;
pub mod logging;

pub use logging::init_logging;
pub use platform::{close_file, open_for_writing};
