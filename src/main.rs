//! shred - Overwrite files with random data, then delete them
//!
//! Usage: shred [--passes N] [--] FILE...
//!
//! Each FILE is shredded independently; a failure on one does not stop
//! the rest.
//!
//! Exit codes:
//! - 0: every file was shredded
//! - 1: at least one file failed
//! - 2: usage or configuration error

use std::process::exit;

use clap::Parser;
use shred::cli::Args;
use shred::config::load_config;
use shred::utils::init_logging;

fn main() {
    let args = Args::parse();

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            exit(2);
        }
    };

    if let Err(e) = init_logging(&config.log_level, config.log_format) {
        eprintln!("⚠️  Logging disabled: {}", e);
    }

    let shredder = match args.shredder(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ {}", e);
            exit(2);
        }
    };

    let mut failed = 0usize;
    for path in &args.files {
        match shredder.shred(path) {
            Ok(()) => eprintln!("✅ Shredded {} ({} passes)", path.display(), shredder.passes()),
            Err(e) => {
                failed += 1;
                eprintln!("❌ {}", e);
                if e.content_overwritten() {
                    eprintln!("   Content was overwritten but {} is still present", path.display());
                }
            }
        }
    }

    if failed > 0 {
        eprintln!("❌ {} of {} files failed", failed, args.files.len());
        exit(1);
    }
}
