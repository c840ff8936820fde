//! Catalogue domain model.
//!
//! # Responsibility
//! - Define the document and author shapes handled by the store.
//!
//! # Invariants
//! - A stored document always carries an assigned (non-blank) id.
//! - `created` is owned by the caller and never rewritten by the store.

pub mod document;
