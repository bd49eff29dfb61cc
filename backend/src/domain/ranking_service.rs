//! Popularity, trending, and recency rankings.
//!
//! Rankings are recomputed from the ratings on every call. Ties on the
//! ranking metric are broken by ascending recipe id so output is
//! deterministic.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, warn};

use super::ports::{
    EntityStore, PopularRecipe, PopularRequest, RatingFilter, RecipeFilter, RecipeRankingQuery,
    TrendingEntry, resolve_limit,
};
use super::rating_aggregator::{average_score, group_by_recipe};
use super::recipe_detail::RecipeDetailComposer;
use super::store_error::{broken_invariant, map_store_error};
use super::time_window::{CreationRange, trending_periods};
use super::{Error, Recipe, RecipeId};

/// Service implementing [`RecipeRankingQuery`].
#[derive(Clone)]
pub struct RecipeRankingService {
    store: EntityStore,
    composer: RecipeDetailComposer,
    clock: Arc<dyn Clock>,
}

impl RecipeRankingService {
    /// Create the service. `clock` decides which month is "current".
    pub fn new(store: EntityStore, clock: Arc<dyn Clock>) -> Self {
        let composer = RecipeDetailComposer::new(store.clone());
        Self {
            store,
            composer,
            clock,
        }
    }

    /// Average score per recipe over the ratings created within `range`.
    async fn averages_within(
        &self,
        range: CreationRange,
    ) -> Result<BTreeMap<RecipeId, f64>, Error> {
        let ratings = self
            .store
            .ratings
            .find(&RatingFilter::created_within(range))
            .await
            .map_err(map_store_error)?;
        Ok(group_by_recipe(ratings)
            .into_iter()
            .filter_map(|(id, group)| average_score(&group).map(|average| (id, average)))
            .collect())
    }

    async fn recipes_by_id(&self, ids: Vec<RecipeId>) -> Result<HashMap<RecipeId, Recipe>, Error> {
        Ok(self
            .store
            .recipes
            .find(&RecipeFilter::with_ids(ids))
            .await
            .map_err(map_store_error)?
            .into_iter()
            .map(|recipe| (recipe.id, recipe))
            .collect())
    }

    /// Fetch ranked recipes in order, skipping ids whose recipe is gone.
    /// The limit applies after the lookup so missing recipes do not shrink
    /// the result.
    async fn fetch_ranked(
        &self,
        ranked: Vec<(RecipeId, f64)>,
        limit: usize,
    ) -> Result<Vec<(Recipe, f64)>, Error> {
        let ids = ranked.iter().map(|(id, _)| *id).collect();
        let mut recipes = self.recipes_by_id(ids).await?;
        Ok(ranked
            .into_iter()
            .filter_map(|(id, metric)| {
                let recipe = recipes.remove(&id);
                if recipe.is_none() {
                    warn!(recipe_id = %id, "ratings reference a recipe that no longer exists");
                }
                recipe.map(|recipe| (recipe, metric))
            })
            .take(limit)
            .collect())
    }
}

/// Order by metric descending, then by recipe id ascending.
fn rank(entries: &mut [(RecipeId, f64)]) {
    entries.sort_by(|(left_id, left), (right_id, right)| {
        right
            .total_cmp(left)
            .then_with(|| left_id.cmp(right_id))
    });
}

fn newest_first(left: &Recipe, right: &Recipe) -> Ordering {
    right
        .created_at
        .cmp(&left.created_at)
        .then_with(|| left.id.cmp(&right.id))
}

#[async_trait]
impl RecipeRankingQuery for RecipeRankingService {
    async fn popular(&self, request: PopularRequest) -> Result<Vec<PopularRecipe>, Error> {
        let limit = resolve_limit(request.limit)?;
        let range = request.window.resolve(self.clock.utc()).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "year": request.window.year,
                "month": request.window.month,
            }))
        })?;

        let mut ranked: Vec<_> = self.averages_within(range).await?.into_iter().collect();
        rank(&mut ranked);
        debug!(limit, eligible = ranked.len(), "ranked popular recipes");

        Ok(self
            .fetch_ranked(ranked, limit)
            .await?
            .into_iter()
            .map(|(recipe, average_rating)| PopularRecipe {
                recipe,
                average_rating,
            })
            .collect())
    }

    async fn trending(&self, limit: Option<usize>) -> Result<Vec<TrendingEntry>, Error> {
        let limit = resolve_limit(limit)?;
        let (previous_period, current_period) = trending_periods(self.clock.utc())
            .map_err(|err| broken_invariant(format!("clock outside calendar range: {err}")))?;

        let previous = self.averages_within(previous_period).await?;
        let mut ranked: Vec<_> = self
            .averages_within(current_period)
            .await?
            .into_iter()
            .map(|(id, current)| {
                let before = previous.get(&id).copied().unwrap_or(0.0);
                (id, current - before)
            })
            .collect();
        rank(&mut ranked);

        let mut entries = Vec::with_capacity(limit.min(ranked.len()));
        for (recipe, change) in self.fetch_ranked(ranked, limit).await? {
            let recipe = self.composer.hydrate(recipe).await?;
            entries.push(TrendingEntry { recipe, change });
        }
        Ok(entries)
    }

    async fn latest(&self, limit: Option<usize>) -> Result<Vec<Recipe>, Error> {
        let limit = resolve_limit(limit)?;
        let mut recipes = self
            .store
            .recipes
            .find(&RecipeFilter::all())
            .await
            .map_err(map_store_error)?;
        recipes.sort_by(newest_first);
        recipes.truncate(limit);
        Ok(recipes)
    }
}

#[cfg(test)]
#[path = "ranking_service_tests.rs"]
mod tests;
