// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    fs,
    io::{self, Seek, SeekFrom},
    path::Path,
};

use log::{debug, info};

use crate::{units::format_size, zerofill::write_zeroes, Error, MAX_OFFSET};

/// Pads a file with zero bytes until it is at least `target` bytes long.
///
/// The file is created when missing and never truncated, so existing
/// content is preserved and a file already at or past `target` is left
/// unchanged.
///
/// # Arguments
/// * `path` - File to grow
/// * `target` - Minimum size in bytes
///
/// # Returns
/// The number of zero bytes appended
pub fn grow_to_size<P>(path: P, target: u64) -> Result<u64, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if target > MAX_OFFSET {
        return Err(Error::seek(path, target, io::Error::from(io::ErrorKind::InvalidInput)));
    }

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| Error::open(path, e))?;

    let current = file.seek(SeekFrom::End(0)).map_err(|e| Error::seek(path, 0, e))?;
    let missing = target.saturating_sub(current);
    if missing == 0 {
        debug!("{path:?} is already {} (target {})", format_size(current), format_size(target));
        return Ok(0);
    }

    debug!("Appending {missing} zero bytes to {path:?} at offset {current}");
    write_zeroes(&mut file, missing).map_err(|e| Error::write(path, e))?;

    info!("Grew {path:?} from {} to {}", format_size(current), format_size(target));
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureKind;
    use test_log::test;

    #[test]
    fn test_pads_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pad.bin");
        fs::write(&path, b"hello").unwrap();

        assert_eq!(grow_to_size(&path, 1000).unwrap(), 995);

        let data = fs::read(&path).unwrap();
        assert_eq!(data.len(), 1000);
        assert_eq!(&data[..5], b"hello");
        assert!(data[5..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.bin");

        assert_eq!(grow_to_size(&path, 200_000).unwrap(), 200_000);
        assert_eq!(fs::metadata(&path).unwrap().len(), 200_000);
    }

    #[test]
    fn test_never_shrinks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        fs::write(&path, [1u8; 10]).unwrap();

        assert_eq!(grow_to_size(&path, 4).unwrap(), 0);
        assert_eq!(grow_to_size(&path, 10).unwrap(), 0);
        assert_eq!(fs::read(&path).unwrap(), [1u8; 10]);
    }

    #[test]
    fn test_unrepresentable_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.bin");

        let err = grow_to_size(&path, MAX_OFFSET + 1).unwrap_err();
        assert_eq!(err.kind(), FailureKind::SeekFailed);
        assert_eq!(err.io_error().kind(), io::ErrorKind::InvalidInput);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("file.bin");

        let err = grow_to_size(&path, 16).unwrap_err();
        assert_eq!(err.kind(), FailureKind::OpenFailed);
    }
}
