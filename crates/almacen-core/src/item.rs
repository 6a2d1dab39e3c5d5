//! # Item Model
//!
//! The data model for catalog items.
//!
//! Items carry a generated id plus the client-supplied fields. The id is
//! minted as a UUID v4 string but stored and compared as an opaque string:
//! lookups never parse ids, so a malformed id is simply an absent one.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ITEM ID
// =============================================================================

/// Opaque identifier for an item.
///
/// Minted via [`ItemId::generate`] as a UUID v4 string. Any string is a
/// valid `ItemId` for lookup purposes; ids that were never minted simply
/// match nothing in the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Mint a fresh unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

// =============================================================================
// ITEM DRAFT
// =============================================================================

/// Client-supplied item fields, without an id.
///
/// Used both to create a new item and to replace the fields of an
/// existing one. `description` and `tax` may be omitted from JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Display name of the item.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Optional tax amount.
    #[serde(default)]
    pub tax: Option<f64>,
}

impl ItemDraft {
    /// Create a draft with only the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tax amount.
    #[must_use]
    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }
}

// =============================================================================
// ITEM
// =============================================================================

/// A stored catalog item: an id plus the draft fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at creation time.
    pub id: ItemId,
    /// Display name of the item.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Optional tax amount.
    #[serde(default)]
    pub tax: Option<f64>,
}

impl Item {
    /// Combine an id with draft fields into a stored item.
    #[must_use]
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            tax: draft.tax,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
