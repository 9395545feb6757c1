//! config.rs
//!
//! Tunables for one parse. Everything a parse needs travels in a
//! [`ParserConfig`] handed to [`CasePlanParser`](crate::CasePlanParser);
//! nothing is read from globals.
//!
//! The defaults reproduce the form layout as issued. A TOML file only
//! needs the keys it changes:
//!
//! ```toml
//! repair_ceiling = 200
//! new_item_fragments = ["10712", "BA05-", "BA23", "BA24", "BA09a", "BA17e"]
//! ```

use serde::{Deserialize, Serialize};

use crate::boundary::DEFAULT_REPAIR_CEILING;
use crate::error::ImportError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// How many stray block labels may be hidden before a service table
    /// is declared malformed.
    pub repair_ceiling: usize,
    /// Span of the last row of a service table, which has no following
    /// row to measure against.
    pub last_row_width: usize,
    /// A referral-note marker within this many leading tokens rejects
    /// the document.
    pub note_marker_window: usize,
    /// Stamped into the care plan's `contractVersion`.
    pub contract_version: String,
    /// Code fragments that mark a service code as a new-regulation code.
    pub new_item_fragments: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            repair_ceiling: DEFAULT_REPAIR_CEILING,
            last_row_width: 8,
            note_marker_window: 10,
            contract_version: "2.1".to_string(),
            new_item_fragments: ["10712", "BA05-", "BA23", "BA24", "BA09a"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Reads a configuration from TOML text. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ImportError> {
        toml::from_str(text).map_err(|e| ImportError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.repair_ceiling, 1000);
        assert_eq!(config.last_row_width, 8);
        assert_eq!(config.note_marker_window, 10);
        assert_eq!(config.contract_version, "2.1");
        assert_eq!(config.new_item_fragments.len(), 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ParserConfig::from_toml_str("repair_ceiling = 5\ncontract_version = \"3.0\"").unwrap();
        assert_eq!(config.repair_ceiling, 5);
        assert_eq!(config.contract_version, "3.0");
        assert_eq!(config.last_row_width, 8);
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let err = ParserConfig::from_toml_str("repair_ceiling = \"many\"").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }
}
