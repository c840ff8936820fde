//! Search request model and per-clause predicates.
//!
//! # Responsibility
//! - Carry the optional title, content, author and date constraints.
//! - Evaluate each clause on its own and report whether it was active.
//!
//! # Invariants
//! - A list clause is active only when its list is present and non-empty.
//! - The date clause is active only when at least one bound is present.
//! - Both bounds are inclusive.
//! - String tests are case-sensitive and byte-exact.

use crate::model::document::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Search options. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Title must start with at least one of these.
    pub title_prefixes: Option<Vec<String>>,
    /// Content must contain at least one of these.
    pub contains_contents: Option<Vec<String>>,
    /// Ids tested by the author clause.
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on `created`.
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`.
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains_contents = Some(needles.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_from = Some(from);
        self
    }

    pub fn with_created_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_to = Some(to);
        self
    }

    /// Returns `true` when no clause is active.
    pub fn is_unconstrained(&self) -> bool {
        active_list(&self.title_prefixes).is_none()
            && active_list(&self.contains_contents).is_none()
            && active_list(&self.author_ids).is_none()
            && !self.has_date_bounds()
    }

    pub fn has_date_bounds(&self) -> bool {
        self.created_from.is_some() || self.created_to.is_some()
    }

    /// Title-prefix clause. `None` when inactive.
    pub fn title_clause(&self, document: &Document) -> Option<bool> {
        active_list(&self.title_prefixes).map(|prefixes| {
            prefixes
                .iter()
                .any(|prefix| document.title.starts_with(prefix.as_str()))
        })
    }

    /// Content-substring clause. `None` when inactive.
    pub fn content_clause(&self, document: &Document) -> Option<bool> {
        active_list(&self.contains_contents).map(|needles| {
            needles
                .iter()
                .any(|needle| document.content.contains(needle.as_str()))
        })
    }

    /// Author clause tested against `candidate`. `None` when inactive.
    ///
    /// A missing candidate never matches an active clause.
    pub fn author_clause(&self, candidate: Option<&str>) -> Option<bool> {
        active_list(&self.author_ids).map(|ids| match candidate {
            Some(candidate) => ids.iter().any(|id| id == candidate),
            None => false,
        })
    }

    /// Date-range clause. `None` when both bounds are absent.
    ///
    /// A document without `created` never satisfies an active range.
    pub fn date_clause(&self, document: &Document) -> Option<bool> {
        if !self.has_date_bounds() {
            return None;
        }
        let Some(created) = document.created else {
            return Some(false);
        };

        let after_start = self.created_from.map_or(true, |from| created >= from);
        let before_end = self.created_to.map_or(true, |to| created <= to);
        Some(after_start && before_end)
    }
}

fn active_list(values: &Option<Vec<String>>) -> Option<&[String]> {
    values.as_deref().filter(|values| !values.is_empty())
}
