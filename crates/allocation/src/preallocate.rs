// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fs::File, path::Path};

use crate::Error;

/// Reserves `length` bytes of storage for `file` starting at offset 0.
///
/// The file size becomes `length` and the reserved range reads as zero.
#[cfg(target_os = "linux")]
pub(crate) fn reserve(file: &mut File, path: &Path, length: u64) -> Result<(), Error> {
    use log::debug;
    use nix::libc;
    use std::{io, os::fd::AsRawFd};

    let len = libc::off_t::try_from(length)
        .map_err(|_| Error::seek(path, length, io::Error::from(io::ErrorKind::InvalidInput)))?;

    debug!("Reserving {length} bytes for {path:?}");
    // posix_fallocate reports failure through its return value, not errno
    let ret = unsafe { libc::posix_fallocate(file.as_raw_fd(), 0, len) };
    if ret != 0 {
        return Err(Error::write(path, io::Error::from_raw_os_error(ret)));
    }

    Ok(())
}

/// Reserves `length` bytes of storage for `file` by writing zeroes.
#[cfg(not(target_os = "linux"))]
pub(crate) fn reserve(file: &mut File, path: &Path, length: u64) -> Result<(), Error> {
    log::warn!("Preallocation is unavailable on this platform, zero filling {path:?}");
    crate::zerofill::write_zeroes(file, length).map_err(|e| Error::write(path, e))
}
