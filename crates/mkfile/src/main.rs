// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fs, path::PathBuf};

use allocation::{units, AllocationOptions, AllocationRequest, FillPolicy};
use clap::Parser;
use log::{debug, LevelFilter};

/// Create a file of an exact size
#[derive(Debug, Parser)]
#[command(name = "mkfile", version, about, long_about = None)]
struct Cli {
    /// Path of the file to create
    path: PathBuf,

    /// Size of the file, e.g. 262144, 256KiB, 10mb or 1G
    #[arg(value_parser = units::parse_size)]
    length: u64,

    /// How the file contents are produced (sparse, zero, preallocate)
    #[arg(long, default_value_t = FillPolicy::Sparse)]
    fill: FillPolicy,

    /// Fail if the file already exists
    #[arg(long)]
    no_clobber: bool,

    /// Pad an existing file with zeroes up to the length instead of replacing it
    #[arg(long, conflicts_with = "no_clobber")]
    grow: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
    debug!("{cli:?}");

    if cli.grow {
        let appended = allocation::grow_to_size(&cli.path, cli.length)?;
        let length = fs::metadata(&cli.path).map_or(cli.length, |m| m.len());
        println!("Grown: {} ({} bytes, +{})", cli.path.display(), length, appended);
        return Ok(());
    }

    let request = AllocationRequest::new(&cli.path, cli.length);
    let options = AllocationOptions::default()
        .with_overwrite(!cli.no_clobber)
        .with_fill(cli.fill);
    allocation::allocate_with(&request, options)?;

    println!("Created: {} ({} bytes)", cli.path.display(), cli.length);
    Ok(())
}
