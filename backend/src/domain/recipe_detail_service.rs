//! Recipe detail, similarity, and per-user listing use-cases.

use async_trait::async_trait;
use tracing::debug;

use super::ports::{EntityStore, RecipeDetailQuery, RecipeFilter};
use super::recipe_detail::{RecipeDetail, RecipeDetailComposer};
use super::similarity::similar_recipes;
use super::store_error::map_store_error;
use super::{Error, Recipe, RecipeId, Username};

/// Service implementing [`RecipeDetailQuery`] over the entity store.
#[derive(Clone)]
pub struct RecipeDetailService {
    store: EntityStore,
    composer: RecipeDetailComposer,
}

impl RecipeDetailService {
    /// Create the service.
    pub fn new(store: EntityStore) -> Self {
        let composer = RecipeDetailComposer::new(store.clone());
        Self { store, composer }
    }

    async fn require_recipe(&self, id: &RecipeId) -> Result<Recipe, Error> {
        self.store
            .recipes
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("recipe {id} not found")))
    }
}

#[async_trait]
impl RecipeDetailQuery for RecipeDetailService {
    async fn detail(&self, id: &RecipeId) -> Result<RecipeDetail, Error> {
        let recipe = self.require_recipe(id).await?;
        self.composer.hydrate(recipe).await
    }

    async fn similar(&self, id: &RecipeId) -> Result<Vec<Recipe>, Error> {
        let target = self.require_recipe(id).await?;
        let candidates = self
            .store
            .recipes
            .find(&RecipeFilter::all())
            .await
            .map_err(map_store_error)?;
        let similar = similar_recipes(&target, candidates);
        debug!(recipe_id = %id, matches = similar.len(), "computed similar recipes");
        Ok(similar)
    }

    async fn by_username(&self, username: &Username) -> Result<Vec<RecipeDetail>, Error> {
        let owner = self
            .store
            .users
            .find_by_username(username)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {username} not found")))?;
        let recipes = self
            .store
            .recipes
            .find(&RecipeFilter::owned_by(owner.id))
            .await
            .map_err(map_store_error)?;
        self.composer.hydrate_all(recipes).await
    }
}
