// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

use crate::config::LoggingLevel;

#[derive(Debug, Parser)]
#[command(name = "blksize")]
#[command(about = "Print the size in bytes of block devices", version)]
pub struct Args {
    /// Device nodes to query
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print sizes in binary units instead of bytes
    #[arg(long, short = 'H', conflicts_with = "json")]
    pub human: bool,

    /// Print a JSON array of results
    #[arg(long)]
    pub json: bool,

    /// Print 18446744073709551615 for devices whose size is unavailable
    #[arg(long)]
    pub sentinel: bool,

    /// Log verbosity; RUST_LOG takes precedence
    #[arg(long, value_enum, default_value_t = LoggingLevel::Warn)]
    pub log_level: LoggingLevel,
}
