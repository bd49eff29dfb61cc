//! Driving port for recipe search and ingredient-based filtering.

use async_trait::async_trait;

use crate::domain::{Difficulty, Error, Recipe, Score};

/// Recognised search options. Every field defaults to "match all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the title or description.
    pub text: Option<String>,
    /// Exact difficulty.
    pub difficulty: Option<Difficulty>,
    /// Inclusive lower bound on preparation minutes.
    pub prep_time_min: Option<u32>,
    /// Inclusive upper bound on preparation minutes.
    pub prep_time_max: Option<u32>,
    /// Inclusive lower bound on an individual rating score.
    pub rating_min: Option<Score>,
    /// Inclusive upper bound on an individual rating score.
    pub rating_max: Option<Score>,
}

/// Whether recipes must contain, or must avoid, the named ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientMatch {
    /// At least one named ingredient is used.
    Include,
    /// None of the named ingredients is used.
    Exclude,
}

/// Ingredient-based query. Names are free text and matched canonically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientFilterRequest {
    /// Ingredient names as typed by the caller.
    pub names: Vec<String>,
    /// Whether matching recipes must use or avoid the names.
    pub mode: IngredientMatch,
}

/// Use-case port for recipe search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeSearchQuery: Send + Sync {
    /// Recipes satisfying every criterion, in store order.
    async fn search(&self, criteria: SearchCriteria) -> Result<Vec<Recipe>, Error>;

    /// Recipes that include or exclude the named ingredients, in store order.
    async fn by_ingredients(&self, request: IngredientFilterRequest)
    -> Result<Vec<Recipe>, Error>;
}
