//! Canonical ingredients shared across recipes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::IngredientId;

/// Validation errors returned by [`IngredientName::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientNameValidationError {
    /// Nothing but whitespace was supplied.
    #[error("ingredient name must not be empty")]
    Empty,
}

/// Canonical ingredient name.
///
/// Canonical form trims the input, collapses inner whitespace runs to a single
/// space, and lowercases it, so `"  Olive   OIL"` and `"olive oil"` name the
/// same ingredient.
///
/// # Examples
/// ```
/// use dishared::domain::IngredientName;
///
/// let name = IngredientName::new("  Olive   OIL").expect("valid name");
/// assert_eq!(name.as_str(), "olive oil");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientName(String);

impl IngredientName {
    /// Canonicalise and validate a raw ingredient name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, IngredientNameValidationError> {
        let canonical = raw
            .as_ref()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if canonical.is_empty() {
            return Err(IngredientNameValidationError::Empty);
        }
        Ok(Self(canonical))
    }

    /// Borrow the canonical name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ingredient entity. Names are unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    /// Stable identifier.
    pub id: IngredientId,
    /// Canonical, lower-cased name.
    pub name: IngredientName,
}

impl Ingredient {
    /// Build an ingredient entity.
    #[must_use]
    pub fn new(id: IngredientId, name: IngredientName) -> Self {
        Self { id, name }
    }
}
