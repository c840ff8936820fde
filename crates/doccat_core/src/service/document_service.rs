//! Document use-case service.
//!
//! # Responsibility
//! - Provide create/save/get/search entry points for core callers.
//! - Delegate storage and matching to the repository.
//!
//! # Invariants
//! - Service APIs never bypass repository id assignment.
//! - Service layer stays storage-agnostic.

use crate::model::document::{Author, Document};
use crate::repo::document_store::DocumentRepository;
use crate::search::request::SearchRequest;
use chrono::Utc;
use log::info;

/// Use-case wrapper around a document repository.
pub struct DocumentService<R: DocumentRepository> {
    repo: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and saves a document stamped with the current time.
    ///
    /// # Contract
    /// - The id is generated by the repository.
    /// - `created` is set to `Utc::now()` before saving.
    pub fn create_document(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Option<Author>,
    ) -> Document {
        let mut document = Document::new(title, content).with_created(Utc::now());
        document.author = author;

        let saved = self.repo.save(document);
        info!(
            "event=document_created module=service status=ok has_author={}",
            saved.author.is_some()
        );
        saved
    }

    /// Saves a caller-built document unchanged apart from id assignment.
    pub fn save_document(&mut self, document: Document) -> Document {
        self.repo.save(document)
    }

    pub fn get_document(&self, id: &str) -> Option<Document> {
        self.repo.find_by_id(id)
    }

    pub fn search_documents(&self, request: &SearchRequest) -> Vec<Document> {
        self.repo.search(request)
    }

    pub fn document_count(&self) -> usize {
        self.repo.len()
    }

    /// Gives back the wrapped repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}
