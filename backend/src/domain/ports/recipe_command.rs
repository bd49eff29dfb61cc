//! Driving port for recipe mutations issued by authenticated users.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeDraft, RecipeId, UserId};

/// Use-case port for creating, updating, and deleting recipes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCommand: Send + Sync {
    /// Publish a new recipe owned by `owner`. If the owner link cannot be
    /// recorded the recipe is removed again.
    async fn create(&self, owner: &UserId, draft: RecipeDraft) -> Result<Recipe, Error>;

    /// Replace the contents of a recipe owned by `caller`.
    async fn update(
        &self,
        caller: &UserId,
        id: &RecipeId,
        draft: RecipeDraft,
    ) -> Result<Recipe, Error>;

    /// Delete a recipe owned by `caller` along with its ratings.
    async fn delete(&self, caller: &UserId, id: &RecipeId) -> Result<(), Error>;
}
