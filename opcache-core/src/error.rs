// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Error types for the opcache analyzer.
//!
//! Every failure in the fetch → decode → report pipeline is one explicit
//! variant. None of them are retried; the CLI prints the message and exits.

use thiserror::Error;

/// Top-level error type for fetching and reporting opcache status.
#[derive(Debug, Error)]
pub enum OpcacheError {
    // =========================================================================
    // Fetch Errors
    // =========================================================================
    #[error("failed to fetch opcache data: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response code: {code}")]
    UnexpectedStatus { code: u16 },

    #[error("failed to read response body: {source}")]
    BodyRead {
        #[source]
        source: reqwest::Error,
    },

    // =========================================================================
    // Decode Errors
    // =========================================================================
    #[error("failed to unmarshal JSON: {0}")]
    Decode(#[from] serde_json::Error),

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using OpcacheError.
pub type OpcacheResult<T> = Result<T, OpcacheError>;
