//! Document repository contract and in-memory store.
//!
//! # Responsibility
//! - Assign ids on save and keep documents in insertion order.
//! - Answer exact-id lookups and multi-criteria searches by linear scan.
//!
//! # Invariants
//! - Every stored document has an assigned id.
//! - `created` is never modified by `save`.
//! - Under `UpsertPolicy::Append` each `save` grows the store by one entry,
//!   even when the id is already present.
//! - `find_by_id` returns the first entry in insertion order.
//!
//! The store is not synchronized; callers serialize access themselves.

use crate::config::{StoreConfig, UpsertPolicy};
use crate::model::document::Document;
use crate::search::matcher::filter_documents;
use crate::search::request::SearchRequest;
use log::debug;

/// Repository interface for catalogue operations.
///
/// All operations are total over well-formed input.
pub trait DocumentRepository {
    /// Stores `document`, assigning an id if it has none, and returns the
    /// stored value.
    fn save(&mut self, document: Document) -> Document;
    /// Returns the first document whose id equals `id` exactly.
    fn find_by_id(&self, id: &str) -> Option<Document>;
    /// Returns every matching document in insertion order.
    fn search(&self, request: &SearchRequest) -> Vec<Document>;
    /// Returns every stored document in insertion order.
    fn all(&self) -> Vec<Document>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory, insertion-ordered document store.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    config: StoreConfig,
}

impl DocumentStore {
    /// Creates an empty store with default behaviour.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            documents: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Overwrites the first entry with the same id in place, keeping its
    /// `created` when one is stored.
    ///
    /// Returns `false` when no entry carries that id.
    fn replace_existing(&mut self, document: &mut Document) -> bool {
        let Some(slot) = self
            .documents
            .iter_mut()
            .find(|stored| stored.id == document.id)
        else {
            return false;
        };

        // A stored creation time is never overwritten.
        document.created = slot.created.or(document.created);
        *slot = document.clone();
        true
    }
}

impl DocumentRepository for DocumentStore {
    fn save(&mut self, mut document: Document) -> Document {
        let id_generated = document.ensure_id();

        let replaced = match self.config.upsert_policy {
            UpsertPolicy::Append => false,
            UpsertPolicy::Replace => !id_generated && self.replace_existing(&mut document),
        };
        if !replaced {
            self.documents.push(document.clone());
        }

        debug!(
            "event=document_saved module=store status=ok id_generated={} replaced={} total={}",
            id_generated,
            replaced,
            self.documents.len()
        );
        document
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        self.documents
            .iter()
            .find(|document| document.id == id)
            .cloned()
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let mode = self.config.match_mode;
        let hits = filter_documents(request, &self.documents, mode);

        debug!(
            "event=document_search module=store status=ok mode={} matched={} total={}",
            mode.as_str(),
            hits.len(),
            self.documents.len()
        );
        hits
    }

    fn all(&self) -> Vec<Document> {
        self.documents.clone()
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
