//! Store behaviour configuration.
//!
//! # Responsibility
//! - Select how search clauses combine and how repeated ids are saved.
//! - Load those switches from JSON.
//!
//! # Invariants
//! - `StoreConfig::default()` reproduces the historical catalogue behaviour
//!   (`MatchMode::Legacy` + `UpsertPolicy::Append`).
//! - Unknown JSON fields are rejected rather than ignored.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How search clauses are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Clauses are OR-combined, the author clause tests the document's own
    /// id and an unbounded date range is vacuously true.
    #[default]
    Legacy,
    /// Active clauses are AND-combined and the author clause tests the
    /// author's id. Clauses with no constraint are skipped.
    Strict,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Strict => "strict",
        }
    }
}

/// What `save` does when the id is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertPolicy {
    /// Always append, even when the id is already present.
    #[default]
    Append,
    /// Replace the first stored entry with the same id, keeping its position.
    Replace,
}

/// Behaviour switches for [`crate::repo::document_store::DocumentStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub match_mode: MatchMode,
    pub upsert_policy: UpsertPolicy,
}

impl StoreConfig {
    /// Parses a config document such as `{"match_mode": "strict"}`.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    /// - Returns [`ConfigError::Parse`] for malformed JSON, unknown fields or
    ///   unknown variant names.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Configuration loading error.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid store config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
