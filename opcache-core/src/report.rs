// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Plain-text report over a decoded status document.
//!
//! One block per script, in whatever order the map yields them.

use std::io::Write;

use crate::error::{OpcacheError, OpcacheResult};
use crate::status::{ScriptEntry, StatusDocument};

/// Decode `body` and write the report to `out`.
///
/// Decoding finishes before the first byte is written, so a malformed body
/// never produces partial output.
pub fn decode_and_report<W: Write>(body: &[u8], out: &mut W) -> OpcacheResult<()> {
    let status = StatusDocument::from_slice(body)?;
    tracing::debug!(scripts = status.scripts.len(), "Decoded opcache status");

    write_report(&status, out).map_err(|source| OpcacheError::Io {
        context: "writing report",
        source,
    })
}

/// Write one block per script entry.
pub fn write_report<W: Write>(status: &StatusDocument, out: &mut W) -> std::io::Result<()> {
    for entry in status.scripts.values() {
        write_entry(entry, out)?;
    }
    out.flush()
}

fn write_entry<W: Write>(entry: &ScriptEntry, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Script: {}", entry.full_path)?;
    writeln!(out, "  Timestamp: {}", entry.timestamp)?;
    writeln!(out, "  Memory:")?;
    writeln!(out, "    Used: {} bytes", entry.memory.used_memory)?;
    writeln!(out, "    Free: {} bytes", entry.memory.free_memory)?;
    writeln!(out, "    Wasted: {} bytes", entry.memory.wasted_memory)?;
    writeln!(out, "  Opcodes Count: {}", entry.opcodes.opcodes_count)?;
    writeln!(out)
}
