//! Catalogue use-case services.
//!
//! # Responsibility
//! - Wrap repository calls into caller-facing use cases.
//! - Keep callers independent of the concrete store.

pub mod document_service;
