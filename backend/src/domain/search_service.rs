//! Recipe search and ingredient-based filtering.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::ports::{
    EntityStore, IngredientFilter, IngredientFilterRequest, IngredientMatch, RatingFilter,
    RecipeFilter, RecipeSearchQuery, SearchCriteria,
};
use super::store_error::map_store_error;
use super::{Error, IngredientName, Recipe, Score};

impl SearchCriteria {
    /// Whether `recipe` passes the text, difficulty, and preparation-time
    /// predicates. Rating bounds are checked separately against the store.
    ///
    /// A recipe without a preparation time only passes when neither time
    /// bound is set. A lower bound of 0 is the default and counts as unset.
    #[must_use]
    pub fn matches_fields(&self, recipe: &Recipe) -> bool {
        let text_ok = self
            .text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .is_none_or(|text| recipe.mentions(&text.to_lowercase()));
        let difficulty_ok = self
            .difficulty
            .is_none_or(|difficulty| recipe.difficulty == difficulty);
        let prep_time_min = self.prep_time_min.filter(|min| *min > 0);
        let time_ok = match (prep_time_min, self.prep_time_max) {
            (None, None) => true,
            (min, max) => recipe.preparation_time.is_some_and(|minutes| {
                min.is_none_or(|min| minutes >= min) && max.is_none_or(|max| minutes <= max)
            }),
        };
        text_ok && difficulty_ok && time_ok
    }

    /// Whether the rating predicate admits every recipe.
    ///
    /// A lower bound of 0 keeps "browse everything" as the default, even for
    /// recipes that have never been rated.
    #[must_use]
    pub fn rating_bounds_are_open(&self) -> bool {
        self.rating_min.unwrap_or(Score::MIN) == Score::MIN
    }
}

/// Service implementing [`RecipeSearchQuery`].
#[derive(Clone)]
pub struct RecipeSearchService {
    store: EntityStore,
}

impl RecipeSearchService {
    /// Create the service.
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    async fn all_recipes(&self) -> Result<Vec<Recipe>, Error> {
        self.store
            .recipes
            .find(&RecipeFilter::all())
            .await
            .map_err(map_store_error)
    }
}

#[async_trait]
impl RecipeSearchQuery for RecipeSearchService {
    async fn search(&self, criteria: SearchCriteria) -> Result<Vec<Recipe>, Error> {
        let candidates: Vec<Recipe> = self
            .all_recipes()
            .await?
            .into_iter()
            .filter(|recipe| criteria.matches_fields(recipe))
            .collect();
        if criteria.rating_bounds_are_open() {
            return Ok(candidates);
        }

        let min = criteria.rating_min.unwrap_or(Score::MIN);
        let max = criteria.rating_max.unwrap_or(Score::MAX);
        let rated: HashSet<_> = self
            .store
            .ratings
            .find(&RatingFilter::scored_between(min, max))
            .await
            .map_err(map_store_error)?
            .into_iter()
            .map(|rating| rating.recipe_id)
            .collect();
        debug!(%min, %max, rated = rated.len(), "applied rating bounds");
        Ok(candidates
            .into_iter()
            .filter(|recipe| rated.contains(&recipe.id))
            .collect())
    }

    async fn by_ingredients(
        &self,
        request: IngredientFilterRequest,
    ) -> Result<Vec<Recipe>, Error> {
        let names = request
            .names
            .iter()
            .map(IngredientName::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                Error::invalid_request(err.to_string()).with_details(json!({ "field": "ings" }))
            })?;
        if names.is_empty() {
            return Err(Error::invalid_request("at least one ingredient is required")
                .with_details(json!({ "field": "ings" })));
        }

        let ingredient_ids: HashSet<_> = self
            .store
            .ingredients
            .find(&IngredientFilter::named(names))
            .await
            .map_err(map_store_error)?
            .into_iter()
            .map(|ingredient| ingredient.id)
            .collect();
        let include = request.mode == IngredientMatch::Include;
        Ok(self
            .all_recipes()
            .await?
            .into_iter()
            .filter(|recipe| recipe.uses_any(&ingredient_ids) == include)
            .collect())
    }
}

#[cfg(test)]
#[path = "search_service_tests.rs"]
mod tests;
