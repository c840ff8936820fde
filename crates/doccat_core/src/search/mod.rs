//! Multi-criteria document search.
//!
//! # Responsibility
//! - Describe search requests and evaluate them against single documents.
//! - Keep clause combination rules in one place so every store shares them.
//!
//! # See also
//! - `config::MatchMode` for the available combination rules.

pub mod matcher;
pub mod request;
