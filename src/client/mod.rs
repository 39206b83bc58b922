// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! HTTP client for the remote wine list.
//!
//! The wine list is a static JSON document. Every search fetches the whole
//! document again, the query is not sent to the server and no filtering is
//! applied here. Callers receive the complete list and decide what to keep.

use std::time::Duration;

use reqwest::{
    StatusCode,
    blocking::Client,
    header::{ACCEPT, HeaderValue},
};
use thiserror::Error;

use crate::model::WineEntry;

#[cfg(test)]
pub(crate) mod test_server;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a status outside `200..300`.
    #[error("HTTP Error {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Failed to parse wine list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Fetches the wine list from a fixed URL.
///
/// One instance is built at start-up and shared between fetch tasks.
pub struct FetchClient {
    http: Client,
    url: String,
}

impl FetchClient {
    /// Creates a client for the given source URL.
    ///
    /// No request timeout is configured, a fetch runs until the server
    /// answers or the connection fails.
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the full wine list and hands it to `on_result`.
    ///
    /// Performs exactly one request per call, without retry. On any failure
    /// `on_result` is not invoked and the error is returned instead.
    ///
    /// # Errors
    ///
    /// * [`FetchError::Transport`] if the request could not be completed.
    /// * [`FetchError::Status`] if the server answered with a non-success
    ///   status.
    /// * [`FetchError::Parse`] if the body is not a JSON array of wines.
    pub fn search<F>(&self, query: &str, on_result: F) -> Result<(), FetchError>
    where
        F: FnOnce(Vec<WineEntry>),
    {
        tracing::debug!(query, url = %self.url, "Fetching wine list");

        match self.fetch() {
            Ok(wines) => {
                tracing::debug!(query, count = wines.len(), "Fetched wine list");
                on_result(wines);
                Ok(())
            }
            Err(error) => {
                match &error {
                    FetchError::Status { status, body, .. } => {
                        tracing::error!(query, status, body_len = body.len(), "{error}")
                    }
                    _ => tracing::error!(query, "{error}"),
                }
                Err(error)
            }
        }
    }

    fn fetch(&self) -> Result<Vec<WineEntry>, FetchError> {
        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response.text().unwrap_or_default()));
        }

        parse_json(&response.text()?)
    }
}

/// Builds the [`FetchError::Status`] for a non-success status, carrying
/// whatever part of the body could be read.
fn status_error(status: StatusCode, body: String) -> FetchError {
    FetchError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    }
}

fn parse_json(body: &str) -> Result<Vec<WineEntry>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
