//! Hydrated recipe views joining owner, ratings, and ingredient names.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ports::{EntityStore, IngredientFilter, UserFilter};
use super::rating_aggregator::{RatingAggregator, annotate_with_poster, average_score};
use super::store_error::{broken_invariant, map_store_error};
use super::{
    Difficulty, Error, IngredientId, IngredientName, RatingWithPoster, Recipe, RecipeId,
    RecipeOwner,
};

/// Ingredient line with its canonical name attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedIngredient {
    /// Canonical ingredient identifier.
    pub ingredient_id: IngredientId,
    /// Canonical ingredient name.
    pub name: IngredientName,
    /// Amount, in `unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Fully hydrated recipe.
///
/// `average_rating` is 0 for a recipe without ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Recipe identifier.
    pub id: RecipeId,
    /// Recipe title.
    pub title: String,
    /// Optional summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered method steps.
    pub steps: Vec<String>,
    /// Preparation time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<u32>,
    /// Declared difficulty.
    pub difficulty: Difficulty,
    /// When the recipe was first stored.
    pub created_at: DateTime<Utc>,
    /// Owner without credentials, or the deleted-user placeholder.
    pub user: RecipeOwner,
    /// Mean score, or 0 when the recipe is unrated.
    pub average_rating: f64,
    /// Every rating, annotated with its poster.
    pub ratings: Vec<RatingWithPoster>,
    /// Ingredient lines with canonical names.
    pub ingredients: Vec<DetailedIngredient>,
}

/// Assembles [`RecipeDetail`] values from the entity store.
#[derive(Clone)]
pub struct RecipeDetailComposer {
    store: EntityStore,
    aggregator: RatingAggregator,
}

impl RecipeDetailComposer {
    /// Create a composer over the store.
    pub fn new(store: EntityStore) -> Self {
        let aggregator = RatingAggregator::new(store.ratings.clone());
        Self { store, aggregator }
    }

    /// Hydrate `recipe`.
    ///
    /// A missing owner or poster degrades to "Deleted User". A missing
    /// ingredient is a broken invariant and fails with an internal error.
    pub async fn hydrate(&self, recipe: Recipe) -> Result<RecipeDetail, Error> {
        let user = self
            .store
            .users
            .find_by_id(&recipe.owner)
            .await
            .map_err(map_store_error)?
            .as_ref()
            .map_or_else(RecipeOwner::deleted, RecipeOwner::from);

        let ratings = self.aggregator.ratings_for(&recipe.id).await?;
        let average_rating = average_score(&ratings).unwrap_or(0.0);
        let mut poster_ids: Vec<_> = ratings.iter().map(|rating| rating.user_id).collect();
        poster_ids.sort_unstable();
        poster_ids.dedup();
        let posters = if poster_ids.is_empty() {
            Vec::new()
        } else {
            self.store
                .users
                .find(&UserFilter::with_ids(poster_ids))
                .await
                .map_err(map_store_error)?
        };
        let ratings = annotate_with_poster(ratings, &posters);

        let ingredients = self.name_ingredients(&recipe).await?;

        Ok(RecipeDetail {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            steps: recipe.steps,
            preparation_time: recipe.preparation_time,
            difficulty: recipe.difficulty,
            created_at: recipe.created_at,
            user,
            average_rating,
            ratings,
            ingredients,
        })
    }

    /// Hydrate several recipes, preserving order.
    pub async fn hydrate_all(&self, recipes: Vec<Recipe>) -> Result<Vec<RecipeDetail>, Error> {
        let mut details = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            details.push(self.hydrate(recipe).await?);
        }
        Ok(details)
    }

    async fn name_ingredients(&self, recipe: &Recipe) -> Result<Vec<DetailedIngredient>, Error> {
        if recipe.ingredients.is_empty() {
            return Ok(Vec::new());
        }
        let ids = recipe.ingredient_ids().into_iter().collect();
        let names: HashMap<IngredientId, IngredientName> = self
            .store
            .ingredients
            .find(&IngredientFilter::with_ids(ids))
            .await
            .map_err(map_store_error)?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient.name))
            .collect();

        recipe
            .ingredients
            .iter()
            .map(|line| {
                let Some(name) = names.get(&line.ingredient_id) else {
                    return Err(broken_invariant(format!(
                        "ingredient {} referenced by recipe {} does not exist",
                        line.ingredient_id, recipe.id
                    )));
                };
                Ok(DetailedIngredient {
                    ingredient_id: line.ingredient_id,
                    name: name.clone(),
                    quantity: line.quantity,
                    unit: line.unit.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "recipe_detail_tests.rs"]
mod tests;
