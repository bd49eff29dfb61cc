//! Resolution of free-text ingredient names to canonical identities.
//!
//! The store's unique-name constraint is the only arbiter of which caller
//! creates an ingredient. The resolver always attempts the conditional insert
//! and, when it loses the race, adopts the winner's identity.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use super::ports::{EntityStoreError, IngredientRepository};
use super::store_error::{broken_invariant, map_store_error};
use super::{
    Error, Ingredient, IngredientId, IngredientInput, IngredientName, RecipeIngredient,
};

/// Maps ingredient names to identities, creating ingredients on first use.
#[derive(Clone)]
pub struct IngredientResolver {
    ingredients: Arc<dyn IngredientRepository>,
}

impl IngredientResolver {
    /// Create a resolver over the ingredient repository.
    pub fn new(ingredients: Arc<dyn IngredientRepository>) -> Self {
        Self { ingredients }
    }

    /// Return the identity of the ingredient called `name`, creating it if
    /// necessary. Casing and whitespace differences resolve to the same
    /// ingredient.
    pub async fn resolve(&self, name: &str) -> Result<IngredientId, Error> {
        let canonical = IngredientName::new(name).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "name" }))
        })?;
        let candidate = Ingredient::new(IngredientId::random(), canonical);

        match self.ingredients.insert_unique(&candidate).await {
            Ok(()) => {
                debug!(name = %candidate.name, id = %candidate.id, "created ingredient");
                Ok(candidate.id)
            }
            Err(EntityStoreError::Conflict { .. }) => self.adopt_existing(&candidate.name).await,
            Err(err) => Err(map_store_error(err)),
        }
    }

    /// Resolve every ingredient line of a draft, preserving order.
    pub async fn resolve_all(
        &self,
        inputs: Vec<IngredientInput>,
    ) -> Result<Vec<RecipeIngredient>, Error> {
        let mut resolved = Vec::with_capacity(inputs.len());
        for input in inputs {
            let ingredient_id = self.resolve(&input.name).await?;
            resolved.push(RecipeIngredient {
                ingredient_id,
                quantity: input.quantity,
                unit: input.unit,
            });
        }
        Ok(resolved)
    }

    async fn adopt_existing(&self, name: &IngredientName) -> Result<IngredientId, Error> {
        let existing = self
            .ingredients
            .find_by_name(name)
            .await
            .map_err(map_store_error)?;
        existing.map(|ingredient| ingredient.id).ok_or_else(|| {
            broken_invariant(format!(
                "ingredient {name} reported as existing but could not be fetched"
            ))
        })
    }
}

#[cfg(test)]
#[path = "ingredient_resolver_tests.rs"]
mod tests;
