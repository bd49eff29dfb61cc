//! Driven port for canonical ingredients.
//!
//! Ingredients are append-only: there is no rename or delete operation, so a
//! canonical name never changes once recipes reference it.

use async_trait::async_trait;

use crate::domain::{Ingredient, IngredientId, IngredientName};

use super::EntityStoreError;

/// Selection criteria for [`IngredientRepository::find`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientFilter {
    /// Restrict to these ids.
    pub ids: Option<Vec<IngredientId>>,
    /// Restrict to these canonical names.
    pub names: Option<Vec<IngredientName>>,
}

impl IngredientFilter {
    /// Select every ingredient.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select the ingredients with the given ids.
    #[must_use]
    pub fn with_ids(ids: Vec<IngredientId>) -> Self {
        Self {
            ids: Some(ids),
            names: None,
        }
    }

    /// Select the ingredients with the given canonical names.
    #[must_use]
    pub fn named(names: Vec<IngredientName>) -> Self {
        Self {
            ids: None,
            names: Some(names),
        }
    }

    /// Whether `ingredient` satisfies the filter.
    #[must_use]
    pub fn matches(&self, ingredient: &Ingredient) -> bool {
        self.ids.as_ref().is_none_or(|ids| ids.contains(&ingredient.id))
            && self
                .names
                .as_ref()
                .is_none_or(|names| names.contains(&ingredient.name))
    }
}

/// Port for ingredient lookup and conditional creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Ingredients matching `filter`, in insertion order.
    async fn find(&self, filter: &IngredientFilter)
    -> Result<Vec<Ingredient>, EntityStoreError>;

    /// Look up an ingredient by canonical name.
    async fn find_by_name(
        &self,
        name: &IngredientName,
    ) -> Result<Option<Ingredient>, EntityStoreError>;

    /// Insert `ingredient` unless its canonical name is taken.
    ///
    /// The uniqueness check and the write are atomic. A taken name yields
    /// [`EntityStoreError::Conflict`].
    async fn insert_unique(&self, ingredient: &Ingredient) -> Result<(), EntityStoreError>;
}
