//! Category types for product organization.

use crate::catalog::product::current_timestamp;
use crate::ids::CategoryId;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// A product category. The catalog is flat: no hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name (English, and the translation fallback).
    pub name: String,
    /// Dutch name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_nl: Option<String>,
    /// Arabic name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    /// Sort order position.
    pub position: i32,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: id.into(),
            name: name.into(),
            name_nl: None,
            name_ar: None,
            position: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Resolve the display name for a locale, falling back to the base name.
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.name,
            Locale::Nl => self.name_nl.as_deref().unwrap_or(&self.name),
            Locale::Ar => self.name_ar.as_deref().unwrap_or(&self.name),
        }
    }

    /// Set the Dutch and Arabic names.
    pub fn with_translations(
        mut self,
        name_nl: impl Into<String>,
        name_ar: impl Into<String>,
    ) -> Self {
        self.name_nl = Some(name_nl.into());
        self.name_ar = Some(name_ar.into());
        self
    }

    /// Set the sort position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}
