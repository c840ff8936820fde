//! Clause combination.
//!
//! # Invariants
//! - `Legacy` ORs the clauses, tests author ids against the document's own
//!   id, and treats an unbounded date range as matching.
//! - `Strict` ANDs only the active clauses and tests author ids against the
//!   document's author.

use crate::config::MatchMode;
use crate::model::document::Document;
use crate::search::request::SearchRequest;

/// Returns whether `document` satisfies `request` under `mode`.
pub fn matches(request: &SearchRequest, document: &Document, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Legacy => matches_legacy(request, document),
        MatchMode::Strict => matches_strict(request, document),
    }
}

/// Filters `documents` in order, cloning the hits into a fresh list.
pub fn filter_documents<'a, I>(
    request: &SearchRequest,
    documents: I,
    mode: MatchMode,
) -> Vec<Document>
where
    I: IntoIterator<Item = &'a Document>,
{
    documents
        .into_iter()
        .filter(|document| matches(request, document, mode))
        .cloned()
        .collect()
}

fn matches_legacy(request: &SearchRequest, document: &Document) -> bool {
    request.title_clause(document).unwrap_or(false)
        || request.content_clause(document).unwrap_or(false)
        || request
            .author_clause(Some(document.id.as_str()))
            .unwrap_or(false)
        // An unbounded range is vacuously true, so without bounds every
        // document matches regardless of the other clauses.
        || request.date_clause(document).unwrap_or(true)
}

fn matches_strict(request: &SearchRequest, document: &Document) -> bool {
    [
        request.title_clause(document),
        request.content_clause(document),
        request.author_clause(document.author_id()),
        request.date_clause(document),
    ]
    .into_iter()
    .flatten()
    .all(|hit| hit)
}
