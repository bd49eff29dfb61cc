//! Driving port for corpus-wide statistics.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Difficulty, Error, IngredientName, Username};

/// How many recipes reference an ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUsage {
    /// Canonical ingredient name.
    pub name: IngredientName,
    /// Recipes referencing the ingredient.
    pub recipe_count: usize,
}

/// How many recipes have a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyCount {
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Recipes at this level.
    pub recipe_count: usize,
}

/// A user and the number of recipes they authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    /// Author's display name.
    pub username: Username,
    /// Recipes the user has published.
    pub recipe_count: usize,
}

/// Full-scan statistics over the recipe corpus.
///
/// Averages are `None` when there is nothing to average.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStats {
    /// Number of stored recipes.
    pub total_recipes: usize,
    /// Number of stored ratings.
    pub total_ratings: usize,
    /// Mean of every rating score across the corpus.
    pub average_rating: Option<f64>,
    /// Ingredient usage, most used first.
    pub recipes_per_ingredient: Vec<IngredientUsage>,
    /// Mean ingredient lines per recipe.
    pub average_ingredients_per_recipe: Option<f64>,
    /// Recipe counts per difficulty, largest first.
    pub recipes_per_difficulty: Vec<DifficultyCount>,
    /// Users with the most recipes.
    pub top_contributors: Vec<Contributor>,
    /// Mean preparation minutes over recipes that declare one.
    pub average_preparation_time: Option<f64>,
}

/// Use-case port for statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeStatsQuery: Send + Sync {
    /// Recompute statistics from the current store contents.
    async fn stats(&self) -> Result<RecipeStats, Error>;
}
