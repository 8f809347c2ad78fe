// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Opcache status document as served by the introspection endpoint.
//!
//! Field names are the wire contract with the remote service. Unknown fields
//! are ignored; missing or `null` values fall back to their zero value.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Treat an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like `null_as_default`, but also for each script entry inside the map.
fn scripts_null_as_default<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, ScriptEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let scripts: Option<HashMap<String, Option<ScriptEntry>>> =
        Option::deserialize(deserializer)?;
    Ok(scripts
        .unwrap_or_default()
        .into_iter()
        .map(|(key, entry)| (key, entry.unwrap_or_default()))
        .collect())
}

/// Root of the status dump. Keys are script identifiers chosen by the
/// remote service (usually the cached file path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatusDocument {
    #[serde(deserialize_with = "scripts_null_as_default")]
    pub scripts: HashMap<String, ScriptEntry>,
}

/// Metadata for one cached script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScriptEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub full_path: String,
    /// Passed through verbatim, never converted to a calendar time.
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub memory: MemoryUsage,
    #[serde(deserialize_with = "null_as_default")]
    pub opcodes: OpcodeStats,
}

/// Byte counts reported for a script. Not cross-checked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MemoryUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub used_memory: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub free_memory: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub wasted_memory: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpcodeStats {
    #[serde(deserialize_with = "null_as_default")]
    pub opcodes_count: i64,
}

impl StatusDocument {
    /// Decode a status document from a raw response body.
    ///
    /// A bare `null` body decodes to an empty document.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let status: Option<Self> = serde_json::from_slice(body)?;
        Ok(status.unwrap_or_default())
    }
}
