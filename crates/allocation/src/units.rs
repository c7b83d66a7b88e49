// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Human readable file sizes
//!
//! Sizes are written as a whole number with an optional unit suffix, such as
//! `262144`, `256KiB`, `10 mb` or `1G`. Single letter suffixes are binary.

use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Storage unit
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum StorageUnit {
    /// Bytes
    #[default]
    Bytes = 1,

    // as 1000s,
    /// Kilobytes
    Kilobytes = 1000,
    /// Megabytes
    Megabytes = 1_000_000,
    /// Gigabytes
    Gigabytes = 1_000_000_000,
    /// Terabytes
    Terabytes = 1_000_000_000_000,

    // as 1024s,
    /// Kibibytes
    Kibibytes = 1024,
    /// Mebibytes
    Mebibytes = 1024 * 1024,
    /// Gibibytes
    Gibibytes = 1024 * 1024 * 1024,
    /// Tebibytes
    Tebibytes = 1024 * 1024 * 1024 * 1024,
}

/// Errors that can occur while parsing a size
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSizeError {
    #[error("empty size")]
    Empty,

    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    #[error("unknown unit '{0}', expected b, kb, mb, gb, tb, kib, mib, gib or tib")]
    UnknownUnit(String),

    #[error("size overflows 64 bits")]
    Overflow,
}

impl StorageUnit {
    /// Number of bytes in one of this unit
    pub fn multiplier(self) -> u64 {
        self as u64
    }

    /// Short suffix accepted by [`parse_size`] and produced by [`format_size`]
    pub fn suffix(self) -> &'static str {
        match self {
            StorageUnit::Bytes => "B",
            StorageUnit::Kilobytes => "kB",
            StorageUnit::Megabytes => "MB",
            StorageUnit::Gigabytes => "GB",
            StorageUnit::Terabytes => "TB",
            StorageUnit::Kibibytes => "KiB",
            StorageUnit::Mebibytes => "MiB",
            StorageUnit::Gibibytes => "GiB",
            StorageUnit::Tebibytes => "TiB",
        }
    }
}

impl FromStr for StorageUnit {
    type Err = ParseSizeError;

    /// Attempt to convert a string to a storage unit
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "" | "b" => Ok(Self::Bytes),
            "kb" => Ok(Self::Kilobytes),
            "mb" => Ok(Self::Megabytes),
            "gb" => Ok(Self::Gigabytes),
            "tb" => Ok(Self::Terabytes),
            "k" | "kib" => Ok(Self::Kibibytes),
            "m" | "mib" => Ok(Self::Mebibytes),
            "g" | "gib" => Ok(Self::Gibibytes),
            "t" | "tib" => Ok(Self::Tebibytes),
            _ => Err(ParseSizeError::UnknownUnit(value.to_owned())),
        }
    }
}

/// Parse a size such as `256KiB` into a number of bytes
pub fn parse_size(value: &str) -> Result<u64, ParseSizeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ParseSizeError::Empty);
    }

    let split = value.find(|c: char| !c.is_ascii_digit()).unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number: u64 = number.parse()?;
    let unit: StorageUnit = unit.trim_start().parse()?;

    number.checked_mul(unit.multiplier()).ok_or(ParseSizeError::Overflow)
}

/// Format a byte count with the largest fitting binary unit
pub fn format_size(size: u64) -> String {
    const BINARY: [StorageUnit; 4] = [
        StorageUnit::Tebibytes,
        StorageUnit::Gibibytes,
        StorageUnit::Mebibytes,
        StorageUnit::Kibibytes,
    ];

    match BINARY.into_iter().find(|unit| size >= unit.multiplier()) {
        Some(unit) => format!("{:.1}{}", size as f64 / unit.multiplier() as f64, unit.suffix()),
        None => format!("{size}{}", StorageUnit::Bytes.suffix()),
    }
}
