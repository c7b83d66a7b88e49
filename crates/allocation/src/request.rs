// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::path::{Path, PathBuf};

use crate::FillPolicy;

/// A request to allocate a file of an exact size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRequest {
    /// Where the file is created
    pub path: PathBuf,

    /// Final size of the file in bytes
    pub length: u64,
}

impl AllocationRequest {
    /// Create a new request for `length` bytes at `path`
    pub fn new<P>(path: P, length: u64) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            path: path.as_ref().to_path_buf(),
            length,
        }
    }
}

/// Controls how a request is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationOptions {
    /// Replace a file already present at the path. When unset the
    /// allocation fails instead and the existing file is left alone.
    pub overwrite_existing: bool,

    /// How the file contents are produced
    pub fill: FillPolicy,
}

impl Default for AllocationOptions {
    fn default() -> Self {
        Self {
            overwrite_existing: true,
            fill: FillPolicy::default(),
        }
    }
}

impl AllocationOptions {
    /// Set whether an existing file may be replaced
    pub fn with_overwrite(self, overwrite_existing: bool) -> Self {
        Self {
            overwrite_existing,
            ..self
        }
    }

    /// Set the fill policy
    pub fn with_fill(self, fill: FillPolicy) -> Self {
        Self { fill, ..self }
    }
}
