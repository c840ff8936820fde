//! Document and author records.
//!
//! # Responsibility
//! - Define the catalogue record and its author reference.
//! - Own id assignment rules used by the store on save.
//!
//! # Invariants
//! - An id is "assigned" when it has at least one non-whitespace character.
//! - Generated ids are random UUID v4 strings and never blank.
//! - `created` is set once by the caller; nothing in this crate overwrites it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalogue identifier.
///
/// Kept as a string because callers may supply ids of their own format.
pub type DocumentId = String;

/// Author reference attached to a document.
///
/// The store enforces no uniqueness on author ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Catalogue record.
///
/// An empty `id` means "not yet assigned"; the store fills it in on save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: DocumentId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<Author>,
    /// Creation instant. Immutable once set.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a document with no id, author or creation time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Sets a caller-provided id.
    ///
    /// A blank value leaves the document unassigned.
    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Returns whether this document already carries a usable id.
    pub fn has_assigned_id(&self) -> bool {
        !is_blank_id(&self.id)
    }

    /// Assigns a fresh id when none is present.
    ///
    /// Returns `true` when a new id was generated. A present id is left
    /// untouched.
    pub fn ensure_id(&mut self) -> bool {
        if self.has_assigned_id() {
            return false;
        }
        self.id = generate_document_id();
        true
    }

    /// Author id, if an author is attached.
    pub fn author_id(&self) -> Option<&str> {
        self.author.as_ref().map(|author| author.id.as_str())
    }
}

/// Generates a new globally unique document id.
pub fn generate_document_id() -> DocumentId {
    Uuid::new_v4().to_string()
}

/// Returns whether `id` is empty or whitespace only.
pub fn is_blank_id(id: &str) -> bool {
    id.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{generate_document_id, is_blank_id, Document};

    #[test]
    fn blank_detection_covers_whitespace() {
        assert!(is_blank_id(""));
        assert!(is_blank_id("  \t\n"));
        assert!(!is_blank_id(" a "));
    }

    #[test]
    fn generated_ids_parse_as_uuid_v4() {
        let id = generate_document_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn ensure_id_keeps_existing_value() {
        let mut doc = Document::new("t", "c").with_id("fixed");
        assert!(!doc.ensure_id());
        assert_eq!(doc.id, "fixed");
    }
}
