// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while allocating a file
///
/// Every variant is terminal for the call that produced it. The file handle
/// has already been released by the time the caller sees the error.
#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    /// The target could not be created or opened
    #[error("failed to open {}", .path.display())]
    #[diagnostic(code(allocation::open_failed))]
    OpenFailed { path: PathBuf, source: io::Error },

    /// The write position could not be moved to the terminal offset
    #[error("failed to seek to offset {offset} in {}", .path.display())]
    #[diagnostic(code(allocation::seek_failed))]
    SeekFailed {
        path: PathBuf,
        offset: u64,
        source: io::Error,
    },

    /// Writing (or reserving) the file contents failed
    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(allocation::write_failed))]
    WriteFailed { path: PathBuf, source: io::Error },
}

/// The kind of an allocation failure, without its context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    OpenFailed,
    SeekFailed,
    WriteFailed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::OpenFailed => f.write_str("open failed"),
            FailureKind::SeekFailed => f.write_str("seek failed"),
            FailureKind::WriteFailed => f.write_str("write failed"),
        }
    }
}

impl Error {
    /// Returns the kind of failure
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::OpenFailed { .. } => FailureKind::OpenFailed,
            Error::SeekFailed { .. } => FailureKind::SeekFailed,
            Error::WriteFailed { .. } => FailureKind::WriteFailed,
        }
    }

    /// Returns the underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            Error::OpenFailed { source, .. } | Error::SeekFailed { source, .. } | Error::WriteFailed { source, .. } => {
                source
            }
        }
    }

    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::OpenFailed {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn seek(path: impl Into<PathBuf>, offset: u64, source: io::Error) -> Self {
        Error::SeekFailed {
            path: path.into(),
            offset,
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::WriteFailed {
            path: path.into(),
            source,
        }
    }
}
