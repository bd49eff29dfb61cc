//! Driving port for hydrated recipe views.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeDetail, RecipeId, Username};

/// Use-case port for recipe detail, similarity, and per-user listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeDetailQuery: Send + Sync {
    /// Hydrated view of one recipe. Unknown ids are `not_found`.
    async fn detail(&self, id: &RecipeId) -> Result<RecipeDetail, Error>;

    /// Other recipes sharing at least one ingredient with `id`.
    async fn similar(&self, id: &RecipeId) -> Result<Vec<Recipe>, Error>;

    /// Every recipe owned by `username`, hydrated.
    async fn by_username(&self, username: &Username) -> Result<Vec<RecipeDetail>, Error>;
}
