//! Shared error type and handle bundle for the entity store ports.
//!
//! The entity store is the system of record. It is reached through four
//! repository ports that share one error type so services can map failures
//! uniformly.

use std::sync::Arc;

use super::{
    IngredientRepository, RatingRepository, RecipeRepository, UserRepository, define_port_error,
};

define_port_error! {
    /// Errors raised by entity store adapters.
    pub enum EntityStoreError {
        /// The store could not be reached.
        Connection { message: String } => "entity store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "entity store query failed: {message}",
        /// A uniqueness constraint rejected the write.
        Conflict { entity: String, key: String } => "{entity} already exists ({key})",
    }
}

/// Explicit store handle passed into every service at construction.
#[derive(Clone)]
pub struct EntityStore {
    /// User accounts.
    pub users: Arc<dyn UserRepository>,
    /// Recipes.
    pub recipes: Arc<dyn RecipeRepository>,
    /// Canonical ingredients.
    pub ingredients: Arc<dyn IngredientRepository>,
    /// Ratings.
    pub ratings: Arc<dyn RatingRepository>,
}

impl EntityStore {
    /// Bundle four independent repository implementations.
    pub fn new(
        users: Arc<dyn UserRepository>,
        recipes: Arc<dyn RecipeRepository>,
        ingredients: Arc<dyn IngredientRepository>,
        ratings: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            users,
            recipes,
            ingredients,
            ratings,
        }
    }

    /// Bundle a single adapter that implements every repository port.
    pub fn from_shared<S>(store: &Arc<S>) -> Self
    where
        S: UserRepository + RecipeRepository + IngredientRepository + RatingRepository + 'static,
    {
        Self {
            users: Arc::clone(store) as Arc<dyn UserRepository>,
            recipes: Arc::clone(store) as Arc<dyn RecipeRepository>,
            ingredients: Arc::clone(store) as Arc<dyn IngredientRepository>,
            ratings: Arc::clone(store) as Arc<dyn RatingRepository>,
        }
    }
}
