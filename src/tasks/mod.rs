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

//! Background fetch task processing.
//!
//! This module offloads wine list fetches from the main UI thread. Each
//! search request runs on its own short-lived thread, so several fetches may
//! be in flight at once and complete in any order. Outcomes are posted back
//! to the application as [`AppEvent`]s, tagged with the sequence number of
//! the request they answer.
//!
//! In-flight fetches are never cancelled. Deciding whether a late outcome is
//! still wanted is left to the search state.

use std::{
    sync::{Arc, mpsc::Sender},
    thread::{self, JoinHandle},
};

use crate::{client::FetchClient, events::AppEvent, model::search::SearchRequest};

/// Runs search requests on behalf of the search view.
pub(crate) trait SearchDispatcher {
    fn dispatch(&self, request: SearchRequest);
}

/// Dispatches each request to a new fetch thread.
pub(crate) struct FetchTasks {
    client: Arc<FetchClient>,
    event_tx: Sender<AppEvent>,
}

impl FetchTasks {
    pub(crate) fn new(client: Arc<FetchClient>, event_tx: Sender<AppEvent>) -> Self {
        Self { client, event_tx }
    }
}

impl SearchDispatcher for FetchTasks {
    fn dispatch(&self, request: SearchRequest) {
        spawn_search_task(Arc::clone(&self.client), request, self.event_tx.clone());
    }
}

/// Spawns a thread performing one fetch for `request`.
///
/// The full wine list is posted as [`AppEvent::SearchResultsReady`], any
/// failure as [`AppEvent::SearchFailed`]. Failures are already logged by the
/// client. Send errors are ignored, they only
/// occur once the application is shutting down.
fn spawn_search_task(client: Arc<FetchClient>, request: SearchRequest, event_tx: Sender<AppEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let SearchRequest { seq, query } = request;

        let result = client.search(&query, |wines| {
            let _ = event_tx.send(AppEvent::SearchResultsReady { seq, wines });
        });

        if let Err(e) = result {
            let _ = event_tx.send(AppEvent::SearchFailed { seq, message: e.to_string() });
        }
    })
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::*;
    use crate::client::test_server::{serve_once, wine_json};

    const WAIT: Duration = Duration::from_secs(10);

    fn request(seq: u64, query: &str) -> SearchRequest {
        SearchRequest { seq, query: query.to_string() }
    }

    #[test]
    fn posts_full_list_tagged_with_request_seq() {
        let (url, server) = serve_once("200 OK", &wine_json(30));
        let client = Arc::new(FetchClient::new(url).unwrap());
        let (event_tx, event_rx) = mpsc::channel();

        spawn_search_task(client, request(7, "a"), event_tx).join().unwrap();

        match event_rx.recv_timeout(WAIT).unwrap() {
            AppEvent::SearchResultsReady { seq, wines } => {
                assert_eq!(seq, 7);
                assert_eq!(wines.len(), 30);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        server.join().unwrap();
    }

    #[test]
    fn posts_failure_for_error_status() {
        let (url, server) = serve_once("404 Not Found", "");
        let client = Arc::new(FetchClient::new(url).unwrap());
        let (event_tx, event_rx) = mpsc::channel();

        spawn_search_task(client, request(3, "r"), event_tx).join().unwrap();

        match event_rx.recv_timeout(WAIT).unwrap() {
            AppEvent::SearchFailed { seq, message } => {
                assert_eq!(seq, 3);
                assert_eq!(message, "HTTP Error Not Found");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(event_rx.try_recv().is_err());

        server.join().unwrap();
    }
}
