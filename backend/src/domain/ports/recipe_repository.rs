//! Driven port for recipe persistence.

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeId, UserId};

use super::EntityStoreError;

/// Selection criteria for [`RecipeRepository::find`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Restrict to recipes owned by this user.
    pub owner: Option<UserId>,
    /// Restrict to these ids.
    pub ids: Option<Vec<RecipeId>>,
}

impl RecipeFilter {
    /// Select every recipe.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select the recipes owned by `owner`.
    #[must_use]
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            ids: None,
        }
    }

    /// Select the recipes with the given ids.
    #[must_use]
    pub fn with_ids(ids: Vec<RecipeId>) -> Self {
        Self {
            owner: None,
            ids: Some(ids),
        }
    }

    /// Whether `recipe` satisfies the filter.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.owner.is_none_or(|owner| recipe.owner == owner)
            && self.ids.as_ref().is_none_or(|ids| ids.contains(&recipe.id))
    }
}

/// Port for recipe storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Recipes matching `filter`, in insertion order.
    async fn find(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>, EntityStoreError>;

    /// Look up a recipe by id.
    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, EntityStoreError>;

    /// Store a new recipe. A duplicate id is a conflict.
    async fn insert(&self, recipe: &Recipe) -> Result<(), EntityStoreError>;

    /// Replace the stored recipe with the same id.
    ///
    /// Returns `false` when no such recipe exists.
    async fn update(&self, recipe: &Recipe) -> Result<bool, EntityStoreError>;

    /// Remove a recipe together with all of its ratings.
    ///
    /// Returns `false` when no such recipe exists.
    async fn delete(&self, id: &RecipeId) -> Result<bool, EntityStoreError>;
}
