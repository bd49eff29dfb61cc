//! Ingredient-overlap similarity between recipes.

use super::Recipe;

/// Recipes from `candidates` sharing at least one ingredient with `target`.
///
/// This is a set-intersection test, not a score: results keep candidate
/// order and never include `target` itself.
#[must_use]
pub fn similar_recipes(target: &Recipe, candidates: Vec<Recipe>) -> Vec<Recipe> {
    let ingredients = target.ingredient_ids();
    if ingredients.is_empty() {
        return Vec::new();
    }
    candidates
        .into_iter()
        .filter(|candidate| candidate.id != target.id && candidate.uses_any(&ingredients))
        .collect()
}
