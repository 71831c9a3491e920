//! CLI argument definitions using clap derive

use crate::config::RunConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Restamp - Recursive Timestamp Rewriter
///
/// Sets the access and modification time of every entry under a
/// directory to one stable timestamp, so build caches keyed on file
/// times stay warm across runs.
#[derive(Parser, Debug)]
#[command(name = "restamp")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Directory whose tree gets re-stamped
    #[arg(env = "RESTAMP_DIR")]
    pub root: PathBuf,

    /// Explicit RFC 3339 timestamp to apply (e.g. 2023-05-01T12:30:00Z)
    #[arg(short, long, env = "RESTAMP_TOUCH_TIME")]
    pub touch_time: Option<String>,

    /// File persisting the timestamp between runs; created on first run
    #[arg(short, long, env = "RESTAMP_STORE_FILE")]
    pub store_file: Option<PathBuf>,

    /// Cache include list the store file is registered in when created
    #[arg(long, env = "RESTAMP_CACHE_INCLUDE_FILE")]
    pub cache_include_file: Option<PathBuf>,

    /// Increase verbosity (-v debug, default info)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Turn parsed arguments into the config object the core runs on
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            root: self.root,
            touch_time: self.touch_time,
            store_file: self.store_file,
            cache_include_file: self.cache_include_file,
        }
    }
}
