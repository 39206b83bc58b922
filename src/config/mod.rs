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

//! Application configuration.
//!
//! This module manages the application configuration file. A missing or
//! unreadable file falls back to the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::search::{MATCHING_ITEM_LIMIT, StalePolicy};

const CONFIG_NAME: &str = "winesearch";

const LOG_FILE: &str = "winesearch.log";

pub(crate) const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/perchrh/vinmonopolet_vegan/master/wine.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub source_url: String,
    pub result_limit: usize,
    pub stale_responses: StalePolicy,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            result_limit: MATCHING_ITEM_LIMIT,
            stale_responses: StalePolicy::default(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Resolves where log output goes.
    ///
    /// Without an explicit setting the log file sits next to the configuration
    /// file, or in the working directory if that cannot be determined.
    pub(crate) fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(LOG_FILE)))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WineEntry, search::SearchState};

    #[test]
    fn partial_config_is_completed_with_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"stale_responses": "last-arrival-wins"}"#).unwrap();

        assert_eq!(config.stale_responses, StalePolicy::LastArrivalWins);
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.result_limit, 25);
    }

    #[test]
    fn result_limit_above_cap_still_keeps_25() {
        let config: AppConfig = serde_json::from_str(r#"{"result_limit": 40}"#).unwrap();
        let mut state = SearchState::new(config.result_limit, config.stale_responses);
        let request = state.set_query("a").unwrap();

        state.apply_results(request.seq, (0..30).map(WineEntry::sample).collect());

        assert_eq!(state.results().len(), 25);
    }

    #[test]
    fn explicit_log_file_is_used() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/tmp/wines.log")),
            ..AppConfig::default()
        };

        assert_eq!(config.log_path(), PathBuf::from("/tmp/wines.log"));
    }

    #[test]
    fn default_log_file_has_expected_name() {
        let config = AppConfig::default();

        assert_eq!(config.log_path().file_name().unwrap(), LOG_FILE);
    }
}
