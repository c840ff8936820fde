//! In-memory document catalogue.
//! Upsert, exact-id lookup and multi-criteria search over a linear scan.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{ConfigError, MatchMode, StoreConfig, UpsertPolicy};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::document::{generate_document_id, is_blank_id, Author, Document, DocumentId};
pub use repo::document_store::{DocumentRepository, DocumentStore};
pub use search::matcher::matches;
pub use search::request::SearchRequest;
pub use service::document_service::DocumentService;

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
