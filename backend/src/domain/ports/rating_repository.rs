//! Driven port for ratings.

use async_trait::async_trait;

use crate::domain::{CreationRange, Rating, RatingId, RecipeId, Score};

use super::EntityStoreError;

/// Selection criteria for [`RatingRepository::find`].
///
/// Filters are pushed into the store so aggregations only materialise the
/// ratings they need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingFilter {
    /// Restrict to ratings of one recipe.
    pub recipe: Option<RecipeId>,
    /// Restrict to ratings created within this range.
    pub created: CreationRange,
    /// Inclusive lower score bound.
    pub min_score: Option<Score>,
    /// Inclusive upper score bound.
    pub max_score: Option<Score>,
}

impl RatingFilter {
    /// Select every rating.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select the ratings of one recipe.
    #[must_use]
    pub fn for_recipe(recipe: RecipeId) -> Self {
        Self {
            recipe: Some(recipe),
            ..Self::default()
        }
    }

    /// Select the ratings created within `range`.
    #[must_use]
    pub fn created_within(range: CreationRange) -> Self {
        Self {
            created: range,
            ..Self::default()
        }
    }

    /// Select the ratings whose score lies in `[min, max]`.
    #[must_use]
    pub fn scored_between(min: Score, max: Score) -> Self {
        Self {
            min_score: Some(min),
            max_score: Some(max),
            ..Self::default()
        }
    }

    /// Whether `rating` satisfies the filter.
    #[must_use]
    pub fn matches(&self, rating: &Rating) -> bool {
        self.recipe.is_none_or(|recipe| rating.recipe_id == recipe)
            && self.created.contains(rating.created_at)
            && self.min_score.is_none_or(|min| rating.score >= min)
            && self.max_score.is_none_or(|max| rating.score <= max)
    }
}

/// Port for rating storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Ratings matching `filter`, in insertion order.
    async fn find(&self, filter: &RatingFilter) -> Result<Vec<Rating>, EntityStoreError>;

    /// Look up a rating by id.
    async fn find_by_id(&self, id: &RatingId) -> Result<Option<Rating>, EntityStoreError>;

    /// Insert `rating` unless its (recipe, user) pair is already rated.
    ///
    /// The uniqueness check and the write are atomic. A second rating for the
    /// same pair yields [`EntityStoreError::Conflict`].
    async fn insert_unique(&self, rating: &Rating) -> Result<(), EntityStoreError>;
}
