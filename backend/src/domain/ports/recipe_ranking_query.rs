//! Driving port for ranked recipe listings.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Error, Recipe, RecipeDetail, TimeWindow};

/// Number of entries returned when the caller gives no limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Request for the most popular recipes within an optional window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopularRequest {
    /// Maximum entries; defaults to [`DEFAULT_LIMIT`].
    pub limit: Option<usize>,
    /// Calendar window restricting which ratings count.
    pub window: TimeWindow,
}

/// Recipe together with its average score in the requested window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularRecipe {
    /// The ranked recipe.
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Mean score within the window.
    pub average_rating: f64,
}

/// Hydrated recipe and its month-over-month change in average score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingEntry {
    /// The hydrated recipe.
    pub recipe: RecipeDetail,
    /// Current-month average minus previous-month average.
    pub change: f64,
}

/// Use-case port for popularity, trending, and recency rankings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRankingQuery: Send + Sync {
    /// Highest average score first; ties by ascending recipe id.
    async fn popular(&self, request: PopularRequest) -> Result<Vec<PopularRecipe>, Error>;

    /// Largest increase over the previous month first; ties by recipe id.
    async fn trending(&self, limit: Option<usize>) -> Result<Vec<TrendingEntry>, Error>;

    /// Most recently created first; ties by recipe id.
    async fn latest(&self, limit: Option<usize>) -> Result<Vec<Recipe>, Error>;
}

/// Apply the default limit and reject zero.
pub fn resolve_limit(limit: Option<usize>) -> Result<usize, Error> {
    match limit {
        None => Ok(DEFAULT_LIMIT),
        Some(0) => Err(Error::invalid_request("limit must be at least 1")),
        Some(limit) => Ok(limit),
    }
}
