// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! HTTP fetcher for the opcache status endpoint.
//!
//! Issues exactly one GET with the client defaults (no timeout override,
//! no extra headers) and hands back the full body on `200 OK`.

use reqwest::{Client, StatusCode};

use crate::error::{OpcacheError, OpcacheResult};

/// Fetches raw status bodies over HTTP.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the body at `url`.
    ///
    /// The URL is passed to the client untouched. Any status other than 200
    /// is an error and the body is dropped unread.
    pub async fn fetch(&self, url: &str) -> OpcacheResult<Vec<u8>> {
        tracing::debug!(url = %url, "Fetching opcache status");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| OpcacheError::Transport { source })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if status != StatusCode::OK {
            return Err(OpcacheError::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| OpcacheError::BodyRead { source })?;

        tracing::debug!(bytes = body.len(), "Read response body");
        Ok(body.to_vec())
    }
}
