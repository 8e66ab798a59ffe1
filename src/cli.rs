//! Command-line arguments for the shred binary

use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::ConfigError;
use crate::security::Shredder;

#[derive(Parser, Debug)]
#[command(name = "shred")]
#[command(version)]
#[command(about = "Overwrite files with random data, then delete them", long_about = None)]
pub struct Args {
    /// Overwrite passes per file, overriding the config file
    #[arg(short = 'n', long)]
    pub passes: Option<NonZeroU32>,

    /// Regular files to shred; put `--` before names starting with '-'
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Shredder from `--passes` if given, otherwise from the config
    pub fn shredder(&self, config: &Config) -> Result<Shredder, ConfigError> {
        match self.passes {
            Some(passes) => Ok(Shredder::with_passes(passes)),
            None => config.shredder(),
        }
    }
}
