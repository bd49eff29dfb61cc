//! Corpus-wide statistics.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{
    Contributor, DifficultyCount, EntityStore, IngredientFilter, IngredientUsage, RatingFilter,
    RecipeFilter, RecipeStats, RecipeStatsQuery, UserFilter,
};
use super::rating_aggregator::{average_score, mean};
use super::store_error::map_store_error;
use super::{Difficulty, Error, Ingredient, Rating, Recipe, User};

/// Number of users listed under top contributors.
pub const TOP_CONTRIBUTORS: usize = 3;

/// Compute statistics from full entity snapshots.
///
/// Ingredient usage counts each recipe once per distinct ingredient and
/// lists unused ingredients with a count of zero. Recipes without a
/// preparation time are left out of the preparation-time average.
#[must_use]
pub fn compute_stats(
    recipes: &[Recipe],
    ratings: &[Rating],
    ingredients: Vec<Ingredient>,
    users: Vec<User>,
) -> RecipeStats {
    let mut usage: HashMap<_, usize> = HashMap::new();
    for recipe in recipes {
        for id in recipe.ingredient_ids() {
            *usage.entry(id).or_default() += 1;
        }
    }
    let mut recipes_per_ingredient: Vec<IngredientUsage> = ingredients
        .into_iter()
        .map(|ingredient| IngredientUsage {
            recipe_count: usage.get(&ingredient.id).copied().unwrap_or(0),
            name: ingredient.name,
        })
        .collect();
    recipes_per_ingredient.sort_by(|left, right| {
        right
            .recipe_count
            .cmp(&left.recipe_count)
            .then_with(|| left.name.cmp(&right.name))
    });

    let ingredient_lines: usize = recipes.iter().map(|recipe| recipe.ingredients.len()).sum();

    let mut recipes_per_difficulty: Vec<DifficultyCount> = Difficulty::ALL
        .into_iter()
        .map(|difficulty| DifficultyCount {
            difficulty,
            recipe_count: recipes
                .iter()
                .filter(|recipe| recipe.difficulty == difficulty)
                .count(),
        })
        .collect();
    recipes_per_difficulty.sort_by(|left, right| right.recipe_count.cmp(&left.recipe_count));

    let mut authored: HashMap<_, usize> = HashMap::new();
    for recipe in recipes {
        *authored.entry(recipe.owner).or_default() += 1;
    }
    let mut top_contributors: Vec<Contributor> = users
        .into_iter()
        .map(|user| Contributor {
            recipe_count: authored.get(&user.id).copied().unwrap_or(0),
            username: user.username,
        })
        .collect();
    top_contributors.sort_by(|left, right| {
        right
            .recipe_count
            .cmp(&left.recipe_count)
            .then_with(|| left.username.cmp(&right.username))
    });
    top_contributors.truncate(TOP_CONTRIBUTORS);

    let timed: Vec<u32> = recipes
        .iter()
        .filter_map(|recipe| recipe.preparation_time)
        .collect();
    let prep_minutes: u64 = timed.iter().copied().map(u64::from).sum();

    RecipeStats {
        total_recipes: recipes.len(),
        total_ratings: ratings.len(),
        average_rating: average_score(ratings),
        recipes_per_ingredient,
        average_ingredients_per_recipe: mean(
            u64::try_from(ingredient_lines).unwrap_or(u64::MAX),
            recipes.len(),
        ),
        recipes_per_difficulty,
        top_contributors,
        average_preparation_time: mean(prep_minutes, timed.len()),
    }
}

/// Service implementing [`RecipeStatsQuery`].
#[derive(Clone)]
pub struct RecipeStatsService {
    store: EntityStore,
}

impl RecipeStatsService {
    /// Create the service.
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecipeStatsQuery for RecipeStatsService {
    async fn stats(&self) -> Result<RecipeStats, Error> {
        let recipes = self
            .store
            .recipes
            .find(&RecipeFilter::all())
            .await
            .map_err(map_store_error)?;
        let ratings = self
            .store
            .ratings
            .find(&RatingFilter::all())
            .await
            .map_err(map_store_error)?;
        let ingredients = self
            .store
            .ingredients
            .find(&IngredientFilter::all())
            .await
            .map_err(map_store_error)?;
        let users = self
            .store
            .users
            .find(&UserFilter::all())
            .await
            .map_err(map_store_error)?;
        debug!(
            recipes = recipes.len(),
            ratings = ratings.len(),
            "computing recipe statistics"
        );
        Ok(compute_stats(&recipes, &ratings, ingredients, users))
    }
}

#[cfg(test)]
#[path = "stats_service_tests.rs"]
mod tests;
