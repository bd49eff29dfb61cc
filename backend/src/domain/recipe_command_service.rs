//! Recipe create, update, and delete use-cases.
//!
//! Drafts are validated before any store mutation. Ingredient names are
//! resolved to canonical identities just before the recipe is written.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{info, warn};

use super::ingredient_resolver::IngredientResolver;
use super::ports::{EntityStore, RecipeCommand};
use super::store_error::map_store_error;
use super::{
    Error, Recipe, RecipeDraft, RecipeId, RecipeValidationError, UserId, ValidRecipeDraft,
};

/// Service implementing [`RecipeCommand`].
#[derive(Clone)]
pub struct RecipeCommandService {
    store: EntityStore,
    resolver: IngredientResolver,
    clock: Arc<dyn Clock>,
}

impl RecipeCommandService {
    /// Create the service. `clock` stamps `created_at` on new recipes.
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>) -> Self {
        let resolver = IngredientResolver::new(store.ingredients.clone());
        Self {
            store,
            resolver,
            clock,
        }
    }

    fn validate(draft: RecipeDraft) -> Result<ValidRecipeDraft, Error> {
        draft.validate().map_err(|err: RecipeValidationError| {
            let field = err.field();
            Error::invalid_request(err.to_string()).with_details(json!({ "field": field }))
        })
    }

    /// Fetch a recipe and check that `caller` owns it.
    async fn owned_recipe(&self, caller: &UserId, id: &RecipeId) -> Result<Recipe, Error> {
        let recipe = self
            .store
            .recipes
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("recipe {id} not found")))?;
        if recipe.owner != *caller {
            return Err(Error::forbidden("only the owner may modify this recipe"));
        }
        Ok(recipe)
    }

    async fn build(
        &self,
        id: RecipeId,
        owner: UserId,
        draft: ValidRecipeDraft,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Recipe, Error> {
        let ingredients = self.resolver.resolve_all(draft.ingredients).await?;
        Ok(Recipe {
            id,
            title: draft.title,
            description: draft.description,
            steps: draft.steps,
            preparation_time: draft.preparation_time,
            difficulty: draft.difficulty,
            owner,
            ingredients,
            created_at,
        })
    }
}

#[async_trait]
impl RecipeCommand for RecipeCommandService {
    async fn create(&self, owner: &UserId, draft: RecipeDraft) -> Result<Recipe, Error> {
        let draft = Self::validate(draft)?;
        let recipe = self
            .build(RecipeId::random(), *owner, draft, self.clock.utc())
            .await?;
        self.store
            .recipes
            .insert(&recipe)
            .await
            .map_err(map_store_error)?;
        if let Err(err) = self.store.users.append_recipe(owner, &recipe.id).await {
            // Undo the insert so no recipe exists without its owner link.
            if let Err(cleanup) = self.store.recipes.delete(&recipe.id).await {
                warn!(recipe_id = %recipe.id, error = %cleanup, "failed to remove unlinked recipe");
            }
            return Err(map_store_error(err));
        }
        info!(recipe_id = %recipe.id, owner = %owner, "recipe created");
        Ok(recipe)
    }

    async fn update(
        &self,
        caller: &UserId,
        id: &RecipeId,
        draft: RecipeDraft,
    ) -> Result<Recipe, Error> {
        let draft = Self::validate(draft)?;
        let existing = self.owned_recipe(caller, id).await?;
        let recipe = self
            .build(existing.id, existing.owner, draft, existing.created_at)
            .await?;
        let replaced = self
            .store
            .recipes
            .update(&recipe)
            .await
            .map_err(map_store_error)?;
        if !replaced {
            return Err(Error::not_found(format!("recipe {id} not found")));
        }
        info!(recipe_id = %id, "recipe updated");
        Ok(recipe)
    }

    async fn delete(&self, caller: &UserId, id: &RecipeId) -> Result<(), Error> {
        self.owned_recipe(caller, id).await?;
        let removed = self
            .store
            .recipes
            .delete(id)
            .await
            .map_err(map_store_error)?;
        if !removed {
            return Err(Error::not_found(format!("recipe {id} not found")));
        }
        info!(recipe_id = %id, "recipe deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "recipe_command_service_tests.rs"]
mod tests;
