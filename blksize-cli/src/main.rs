// SPDX-License-Identifier: GPL-3.0-only

mod args;
mod config;
mod logging;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use args::Args;
use report::{Entry, Style};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.log_level);

    tracing::debug!(
        "blksize v{} querying {} path(s)",
        env!("CARGO_PKG_VERSION"),
        args.paths.len()
    );

    let entries: Vec<Entry> = args
        .paths
        .iter()
        .map(|path| {
            let result = blksize_sys::device_size_at(path);
            if let Err(e) = &result {
                tracing::debug!(path = %path.display(), "size unavailable: {e}");
            }
            Entry::new(path, result)
        })
        .collect();

    if args.json {
        println!("{}", report::render_json(&entries)?);
    } else {
        let style = Style {
            human: args.human,
            sentinel: args.sentinel,
        };
        print!("{}", report::render_plain(&entries, style));

        if !args.sentinel {
            for entry in entries.iter().filter(|e| !e.is_ok()) {
                eprintln!(
                    "blksize: {}: {}",
                    entry.path,
                    entry.error.as_deref().unwrap_or_default()
                );
            }
        }
    }

    if entries.iter().all(Entry::is_ok) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
