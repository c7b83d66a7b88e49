// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    fs::File,
    io::{Seek, SeekFrom, Write},
    path::Path,
};

use log::debug;

use crate::Error;

/// Extends an empty file to `length` bytes by writing a single zero byte
/// at its last offset.
///
/// # Arguments
/// * `file` - Freshly truncated file open for writing
/// * `path` - Path of `file`, used for error context
/// * `length` - Final size in bytes, at least 1
///
/// # Returns
/// `Result<(), Error>` with `SeekFailed` or `WriteFailed` on failure
pub(crate) fn extend(file: &mut File, path: &Path, length: u64) -> Result<(), Error> {
    let Some(last) = length.checked_sub(1) else {
        return Ok(());
    };

    debug!("Seeking to offset {last} of {path:?}");
    file.seek(SeekFrom::Start(last)).map_err(|e| Error::seek(path, last, e))?;
    file.write_all(&[0]).map_err(|e| Error::write(path, e))?;

    Ok(())
}
