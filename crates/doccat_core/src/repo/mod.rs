//! Repository contracts and in-memory storage.
//!
//! # Responsibility
//! - Define the save/search/lookup contract used by services.
//! - Provide the linear-scan in-memory implementation.
//!
//! # Invariants
//! - Stored order is insertion order; no operation re-sorts.
//! - Reads hand out owned copies, so callers cannot mutate stored state.

pub mod document_store;
