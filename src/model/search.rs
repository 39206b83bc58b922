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

//! Wine search state.
//!
//! This module provides the state behind the search view: the query text, the
//! truncated result list of the most recently applied response, and the
//! bookkeeping needed to tell a current response from a stale one.

use serde::{Deserialize, Serialize};

use crate::model::WineEntry;

/// Maximum number of entries kept from a single response.
pub(crate) const MATCHING_ITEM_LIMIT: usize = 25;

/// How responses to superseded requests are treated.
///
/// Fetches are not cancelled when a newer query is issued, so their responses
/// may complete in any order.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Apply a response only if it belongs to the most recently issued
    /// request.
    #[default]
    Discard,

    /// Apply every response as it arrives, the last one to arrive wins even if
    /// it answers an older query.
    LastArrivalWins,
}

/// A fetch issued on behalf of a query.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct SearchRequest {
    pub(crate) seq: u64,
    pub(crate) query: String,
}

#[derive(Debug)]
pub(crate) struct SearchState {
    query: String,
    results: Vec<WineEntry>,
    error: Option<String>,
    // Bumped on every issued request and on every reset to idle, so only one
    // sequence number is ever current.
    latest_request: u64,
    limit: usize,
    policy: StalePolicy,
}

impl SearchState {
    /// Creates an idle state. `limit` can only lower the number of kept
    /// entries, never raise it above `MATCHING_ITEM_LIMIT`.
    pub(crate) fn new(limit: usize, policy: StalePolicy) -> Self {
        Self {
            query: String::new(),
            results: vec![],
            error: None,
            latest_request: 0,
            limit: limit.min(MATCHING_ITEM_LIMIT),
            policy,
        }
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn results(&self) -> &[WineEntry] {
        &self.results
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the clear affordance should be shown.
    pub(crate) fn has_active_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Replaces the query text.
    ///
    /// An empty query resets to idle and returns `None`, otherwise a new
    /// request is returned for the caller to dispatch. Any error from an
    /// earlier request is cleared.
    pub(crate) fn set_query(&mut self, text: &str) -> Option<SearchRequest> {
        if text.is_empty() {
            self.reset();
            return None;
        }

        self.query = text.to_string();
        self.error = None;
        self.latest_request += 1;

        Some(SearchRequest {
            seq: self.latest_request,
            query: self.query.clone(),
        })
    }

    /// Unconditionally resets to idle, clearing query, results and error.
    pub(crate) fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.error = None;
        self.latest_request += 1;
    }

    /// Stores the first `limit` entries of a response, in source order.
    ///
    /// Returns `false` if the response was discarded as stale.
    pub(crate) fn apply_results(&mut self, seq: u64, mut wines: Vec<WineEntry>) -> bool {
        if !self.accepts(seq) {
            return false;
        }

        wines.truncate(self.limit);
        self.results = wines;
        self.error = None;

        true
    }

    /// Records a failed fetch, the current results are left untouched.
    ///
    /// Returns `false` if the failure was discarded as stale.
    pub(crate) fn apply_failure(&mut self, seq: u64, message: String) -> bool {
        if !self.accepts(seq) {
            return false;
        }

        self.error = Some(message);

        true
    }

    fn accepts(&self, seq: u64) -> bool {
        match self.policy {
            StalePolicy::Discard => seq == self.latest_request,
            StalePolicy::LastArrivalWins => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(n: usize) -> Vec<WineEntry> {
        (0..n).map(WineEntry::sample).collect()
    }

    #[test]
    fn results_are_a_prefix_capped_at_limit() {
        for n in [0, 1, 24, 25, 26, 30] {
            let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);
            let request = state.set_query("a").unwrap();

            assert!(state.apply_results(request.seq, source(n)));

            let expected = n.min(MATCHING_ITEM_LIMIT);
            assert_eq!(state.results().len(), expected);
            assert_eq!(state.results(), &source(n)[..expected]);
        }
    }

    #[test]
    fn configured_limit_cannot_raise_the_cap() {
        let mut state = SearchState::new(40, StalePolicy::Discard);
        let request = state.set_query("a").unwrap();

        assert!(state.apply_results(request.seq, source(30)));

        assert_eq!(state.results().len(), MATCHING_ITEM_LIMIT);
        assert_eq!(state.results(), &source(30)[..MATCHING_ITEM_LIMIT]);
    }

    #[test]
    fn configured_limit_can_lower_the_cap() {
        let mut state = SearchState::new(10, StalePolicy::Discard);
        let request = state.set_query("a").unwrap();

        state.apply_results(request.seq, source(30));

        assert_eq!(state.results().len(), 10);
    }

    #[test]
    fn empty_query_is_idle() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);
        let request = state.set_query("red").unwrap();
        state.apply_results(request.seq, source(3));
        assert!(state.has_active_query());

        assert_eq!(state.set_query(""), None);

        assert!(state.results().is_empty());
        assert!(!state.has_active_query());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn requests_are_numbered_in_issue_order() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);

        let first = state.set_query("r").unwrap();
        let second = state.set_query("re").unwrap();

        assert!(second.seq > first.seq);
        assert_eq!(second.query, "re");
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);
        let request = state.set_query("red").unwrap();
        state.apply_results(request.seq, source(5));
        let failed = state.set_query("redd").unwrap();
        state.apply_failure(failed.seq, "HTTP 500".to_string());

        state.reset();

        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn discard_policy_drops_responses_to_superseded_requests() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);
        let r = state.set_query("r").unwrap();
        let re = state.set_query("re").unwrap();

        assert!(state.apply_results(re.seq, source(2)));
        assert!(!state.apply_results(r.seq, source(10)));

        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn discard_policy_drops_responses_after_reset() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);
        let r = state.set_query("r").unwrap();
        state.reset();

        assert!(!state.apply_results(r.seq, source(3)));
        assert!(state.results().is_empty());
    }

    #[test]
    fn last_arrival_wins_applies_late_responses() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::LastArrivalWins);
        let r = state.set_query("r").unwrap();
        let re = state.set_query("re").unwrap();

        assert!(state.apply_results(re.seq, source(2)));
        assert!(state.apply_results(r.seq, source(10)));

        assert_eq!(state.results().len(), 10);
        assert_eq!(state.query(), "re");
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);
        let first = state.set_query("r").unwrap();
        state.apply_results(first.seq, source(4));
        let second = state.set_query("re").unwrap();

        assert!(state.apply_failure(second.seq, "HTTP Error Not Found".to_string()));

        assert_eq!(state.results(), &source(4)[..]);
        assert_eq!(state.error(), Some("HTTP Error Not Found"));
    }

    #[test]
    fn new_query_clears_previous_failure() {
        let mut state = SearchState::new(MATCHING_ITEM_LIMIT, StalePolicy::Discard);
        let failed = state.set_query("r").unwrap();
        state.apply_failure(failed.seq, "HTTP Error Not Found".to_string());

        state.set_query("re").unwrap();

        assert_eq!(state.error(), None);
    }

    #[test]
    fn stale_policy_uses_kebab_case_names() {
        #[derive(Deserialize)]
        struct Holder {
            policy: StalePolicy,
        }

        let holder: Holder = serde_json::from_str(r#"{"policy": "last-arrival-wins"}"#).unwrap();
        assert_eq!(holder.policy, StalePolicy::LastArrivalWins);
    }
}
