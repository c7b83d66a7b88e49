// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, str::FromStr};

use thiserror::Error;

/// How the bytes ahead of the end of a new file are produced
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPolicy {
    /// Seek to the last offset and write a single zero byte.
    /// The gap is left to the filesystem and reads back as zero.
    #[default]
    Sparse,

    /// Write every byte as zero. Storage is physically used.
    ZeroFill,

    /// Reserve the blocks up front, falling back to [`FillPolicy::ZeroFill`]
    /// where the platform has no preallocation call.
    Preallocate,
}

/// Error returned for an unknown fill policy name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown fill policy '{0}', expected one of: sparse, zero, preallocate")]
pub struct ParseFillPolicyError(pub String);

impl fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillPolicy::Sparse => f.write_str("sparse"),
            FillPolicy::ZeroFill => f.write_str("zero"),
            FillPolicy::Preallocate => f.write_str("preallocate"),
        }
    }
}

impl FromStr for FillPolicy {
    type Err = ParseFillPolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "sparse" => Ok(Self::Sparse),
            "zero" | "zerofill" => Ok(Self::ZeroFill),
            "preallocate" | "fallocate" => Ok(Self::Preallocate),
            _ => Err(ParseFillPolicyError(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_parse_back() {
        for policy in [FillPolicy::Sparse, FillPolicy::ZeroFill, FillPolicy::Preallocate] {
            assert_eq!(policy.to_string().parse::<FillPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("ZeroFill".parse::<FillPolicy>(), Ok(FillPolicy::ZeroFill));
        assert_eq!("fallocate".parse::<FillPolicy>(), Ok(FillPolicy::Preallocate));
    }

    #[test]
    fn test_unknown() {
        let err = "dense".parse::<FillPolicy>().unwrap_err();
        assert_eq!(err, ParseFillPolicyError("dense".into()));
        assert!(err.to_string().contains("'dense'"));
    }
}
