// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::io::{self, Write};

/// Size of the zero buffer used per write call
const CHUNK_SIZE: usize = 64 * 1024;

/// Writes `count` zero bytes at the current position of `writer`.
///
/// Zeroes are written in fixed chunks so arbitrarily large counts use a
/// bounded amount of memory.
pub(crate) fn write_zeroes<W: Write>(writer: &mut W, count: u64) -> io::Result<()> {
    let zeroes = [0u8; CHUNK_SIZE];
    let mut remaining = count;

    while remaining > 0 {
        let n = remaining.min(CHUNK_SIZE as u64) as usize;
        writer.write_all(&zeroes[..n])?;
        remaining -= n as u64;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count() {
        for count in [0, 1, CHUNK_SIZE as u64 - 1, CHUNK_SIZE as u64, 3 * CHUNK_SIZE as u64 + 17] {
            let mut out = Vec::new();
            write_zeroes(&mut out, count).unwrap();
            assert_eq!(out.len() as u64, count);
            assert!(out.iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn test_appends_after_existing() {
        let mut out = vec![7u8; 3];
        write_zeroes(&mut out, 2).unwrap();
        assert_eq!(out, [7, 7, 7, 0, 0]);
    }
}
