// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Allocation of files with an exact size
//!
//! A file of N bytes is produced by truncating the target, seeking to offset
//! `N - 1` and writing one zero byte. On filesystems with sparse file support
//! the skipped range takes no storage until written. [`FillPolicy`] selects
//! between that and physically backed files.

mod errors;
pub use errors::*;

mod fill;
pub use fill::*;

mod request;
pub use request::*;

mod grow;
pub use grow::grow_to_size;

mod preallocate;
mod sparsefile;
pub mod units;
mod zerofill;

use std::{fs, io, path::Path};

use log::{debug, info};

use units::format_size;

/// Largest offset a file position can take on every supported platform
pub(crate) const MAX_OFFSET: u64 = i64::MAX as u64;

/// Creates (or replaces) the file at `path` with a size of exactly `length`
/// bytes using a sparse allocation.
///
/// # Arguments
/// * `path` - Path where the file should be created
/// * `length` - Size in bytes for the file
///
/// # Returns
/// `Result<(), Error>` indicating success or the failing step
pub fn allocate<P>(path: P, length: u64) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    allocate_with(&AllocationRequest::new(path, length), AllocationOptions::default())
}

/// Carries out an allocation request with explicit options.
///
/// On success the file exists and its size equals `request.length`. The file
/// handle is owned for the duration of the call and released on every path.
pub fn allocate_with(request: &AllocationRequest, options: AllocationOptions) -> Result<(), Error> {
    let AllocationRequest { path, length } = request;
    let length = *length;

    // Reject offsets the platform cannot represent before touching the filesystem
    if let Some(last) = length.checked_sub(1) {
        if last > MAX_OFFSET {
            return Err(Error::seek(path, last, io::Error::from(io::ErrorKind::InvalidInput)));
        }
    }

    debug!(
        "Opening {path:?} (overwrite: {}, fill: {})",
        options.overwrite_existing, options.fill
    );
    let mut opts = fs::OpenOptions::new();
    opts.write(true);
    if options.overwrite_existing {
        opts.create(true).truncate(true);
    } else {
        opts.create_new(true);
    }
    let mut file = opts.open(path).map_err(|e| Error::open(path, e))?;

    if length == 0 {
        info!("Created empty file {path:?}");
        return Ok(());
    }

    match options.fill {
        FillPolicy::Sparse => sparsefile::extend(&mut file, path, length)?,
        FillPolicy::ZeroFill => zerofill::write_zeroes(&mut file, length).map_err(|e| Error::write(path, e))?,
        FillPolicy::Preallocate => preallocate::reserve(&mut file, path, length)?,
    }

    info!("Allocated {} ({length} bytes) at {path:?}", format_size(length));
    Ok(())
}
